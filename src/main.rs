use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use duplicator::cli::CliArgs;
use duplicator::commands::{perform, Completion, Invocation};
use duplicator::config::EditorConfig;
use duplicator::document::Document;
use duplicator::editable::SelectionRange;

/// Machine-readable result for `--json`
#[derive(Serialize)]
struct JsonReport<'a> {
    lines: &'a [String],
    selections: &'a [SelectionRange],
    completion: Completion,
}

fn main() -> Result<()> {
    let _log_guard = duplicator::tracing::init();

    let args = CliArgs::parse();
    let config = EditorConfig::load();
    let run = args.into_config(&config);

    let mut document = Document::from_file(&run.file)?;
    document.buffer.set_selection(run.selection);

    let invocation = Invocation::new(
        run.command.identifier(&config.bundle_identifier),
        config.bundle_identifier.clone(),
    );
    let completion = perform(&invocation, &mut document.buffer, &run.indent);
    tracing::info!(
        command = run.command.display_name(),
        outcome = ?completion.outcome,
        "Command completed"
    );

    if run.in_place {
        document.save()?;
    }

    if run.json {
        let report = JsonReport {
            lines: &document.buffer.lines,
            selections: &document.buffer.selections,
            completion,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
        println!("{}", json);
    } else if !run.in_place {
        print!("{}", document.text());
    }

    Ok(())
}
