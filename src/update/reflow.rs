//! Break a one-line parameter list over several indented lines
//!
//! ```text
//!     func foo(a: Int, b: (x: Int, y: Int)) {
//! ```
//!
//! becomes
//!
//! ```text
//!     func foo(
//!         a: Int,
//!         b: (x: Int, y: Int)
//!     ) {
//! ```
//!
//! The list runs from the first `(` to the last `)` on the line. Brackets
//! are not matched, so a line holding two separate groups such as
//! `f(a)(b)` is cut at the outermost pair.

use crate::editable::{leading_indent, IndentSettings, Position, SourceBuffer};
use crate::util::split_parameters;

use super::{EditOutcome, SkipReason};

const OPEN_PAREN: char = '(';
const CLOSE_PAREN: char = ')';

pub fn break_parameters(buffer: &mut SourceBuffer, indent: &IndentSettings) -> EditOutcome {
    let Some(selection) = buffer.primary_selection() else {
        tracing::debug!("break: no selection");
        return EditOutcome::Skipped(SkipReason::NoSelection);
    };
    let Some(line_index) = buffer.clamp_line(selection.start.line) else {
        tracing::debug!("break: empty buffer");
        return EditOutcome::Skipped(SkipReason::EmptyBuffer);
    };

    let line = buffer.line(line_index).unwrap_or_default();
    let reflowed = match reflow_line(line, indent) {
        Ok(lines) => lines,
        Err(reason) => {
            tracing::debug!(line_index, ?reason, "break: nothing to reflow");
            return EditOutcome::Skipped(reason);
        }
    };

    tracing::debug!(line_index, lines = reflowed.len(), "break: applied");
    buffer.lines.splice(line_index..=line_index, reflowed);
    buffer.set_cursor(Position::new(line_index, 0));
    EditOutcome::Applied
}

/// Lay out one line as `head(`, one line per parameter, `)tail`
fn reflow_line(line: &str, indent: &IndentSettings) -> Result<Vec<String>, SkipReason> {
    let open = line.find(OPEN_PAREN).ok_or(SkipReason::NoParameterList)?;
    let close = line.rfind(CLOSE_PAREN).ok_or(SkipReason::NoParameterList)?;
    if close < open {
        return Err(SkipReason::NoParameterList);
    }

    let head = &line[..=open];
    let body = &line[open + OPEN_PAREN.len_utf8()..close];
    let tail = &line[close..];

    let base_indent = leading_indent(line);
    let param_indent = format!("{}{}", base_indent, indent.unit());

    let params = split_parameters(body, &param_indent);
    if params.is_empty() {
        return Err(SkipReason::EmptyParameterList);
    }

    let mut lines = Vec::with_capacity(params.len() + 2);
    lines.push(head.to_string());
    lines.extend(params);
    lines.push(format!("{base_indent}{tail}"));
    Ok(lines)
}
