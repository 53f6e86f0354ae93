//! Command-line argument parsing
//!
//! Runs one command against a file, the way the host editor would:
//! - pick the command (duplicate, delete, break)
//! - place the selection with 1-indexed line/column flags
//! - override the configured indentation

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::config::EditorConfig;
use crate::editable::{IndentSettings, Position, SelectionRange};

/// Duplicate, delete or break lines of a file
#[derive(Parser, Debug)]
#[command(name = "duplicator", version, about = "Selection-aware line editing commands")]
pub struct CliArgs {
    /// Command to run: duplicate, delete or break
    #[arg(value_name = "COMMAND")]
    pub command: Command,

    /// File to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Selection start line (1-indexed)
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub line: usize,

    /// Selection start column (1-indexed)
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub column: usize,

    /// Selection end line (1-indexed, defaults to --line)
    #[arg(long, value_name = "N")]
    pub end_line: Option<usize>,

    /// Selection end column (1-indexed, defaults to --column)
    #[arg(long, value_name = "N")]
    pub end_column: Option<usize>,

    /// Spaces per indentation level
    #[arg(long, value_name = "N")]
    pub indent_width: Option<usize>,

    /// Indent with tabs
    #[arg(long)]
    pub tabs: bool,

    /// Rewrite the file instead of printing the result
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Print lines, selections and outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub command: Command,
    pub file: PathBuf,
    /// 0-indexed selection
    pub selection: SelectionRange,
    pub indent: IndentSettings,
    pub in_place: bool,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration, filling
    /// indentation from `config` where no flag was given
    pub fn into_config(self, config: &EditorConfig) -> RunConfig {
        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let start = Position::new(self.line.saturating_sub(1), self.column.saturating_sub(1));
        let end = Position::new(
            self.end_line.unwrap_or(self.line).saturating_sub(1),
            self.end_column.unwrap_or(self.column).saturating_sub(1),
        );

        let mut indent = config.indent_settings();
        if let Some(width) = self.indent_width {
            indent.width = width;
        }
        if self.tabs {
            indent.uses_tabs = true;
        }

        RunConfig {
            command: self.command,
            file: self.file,
            selection: SelectionRange::new(start, end),
            indent,
            in_place: self.in_place,
            json: self.json,
        }
    }
}
