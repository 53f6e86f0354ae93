//! Update functions for the line editing commands
//!
//! Each command is a total function over `&mut SourceBuffer`: bad input is
//! clamped or skipped, never reported as an error. The returned
//! [`EditOutcome`] says whether the buffer changed and, if not, why.

mod delete;
mod duplicate;
mod reflow;

use serde::Serialize;
use tracing::{debug, span, Level};

use crate::editable::{IndentSettings, SourceBuffer};
use crate::messages::EditMsg;

pub use delete::delete;
pub use duplicate::duplicate;
pub use reflow::break_parameters;

/// Why a command left the buffer untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The host passed no selection
    NoSelection,
    /// The buffer has no lines
    EmptyBuffer,
    /// No `(` or no `)` on the line, or `)` comes first
    NoParameterList,
    /// The parentheses enclose nothing but whitespace
    EmptyParameterList,
}

/// Result of running one command
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EditOutcome {
    Applied,
    Skipped(SkipReason),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// Main update function - dispatches a message to its command
pub fn update(buffer: &mut SourceBuffer, msg: EditMsg, indent: &IndentSettings) -> EditOutcome {
    let span = span!(Level::DEBUG, "update", ?msg);
    let _guard = span.enter();

    let before = buffer.primary_selection();
    let outcome = match msg {
        EditMsg::Duplicate => duplicate(buffer),
        EditMsg::Delete => delete(buffer),
        EditMsg::Break => break_parameters(buffer, indent),
    };

    debug!(
        ?outcome,
        ?before,
        after = ?buffer.primary_selection(),
        lines = buffer.line_count(),
        "command finished"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{Position, SelectionRange};

    fn buffer_with_cursor(lines: &[&str], line: usize, column: usize) -> SourceBuffer {
        SourceBuffer::from_lines(lines.iter().copied())
            .with_selection(SelectionRange::cursor(Position::new(line, column)))
    }

    #[test]
    fn test_update_routes_duplicate() {
        let mut buffer = buffer_with_cursor(&["a"], 0, 0);
        let outcome = update(&mut buffer, EditMsg::Duplicate, &IndentSettings::default());
        assert!(outcome.is_applied());
        assert_eq!(buffer.lines, vec!["a", "a"]);
    }

    #[test]
    fn test_update_routes_delete() {
        let mut buffer = buffer_with_cursor(&["a", "b"], 0, 0);
        let outcome = update(&mut buffer, EditMsg::Delete, &IndentSettings::default());
        assert!(outcome.is_applied());
        assert_eq!(buffer.lines, vec!["b"]);
    }

    #[test]
    fn test_update_routes_break() {
        let mut buffer = buffer_with_cursor(&["f(a, b)"], 0, 0);
        let outcome = update(&mut buffer, EditMsg::Break, &IndentSettings::spaces(2));
        assert!(outcome.is_applied());
        assert_eq!(buffer.lines, vec!["f(", "  a,", "  b", ")"]);
    }

    #[test]
    fn test_every_command_skips_without_selection() {
        for msg in [EditMsg::Duplicate, EditMsg::Delete, EditMsg::Break] {
            let mut buffer = SourceBuffer::from_lines(["f(a, b)"]);
            let outcome = update(&mut buffer, msg, &IndentSettings::default());
            assert_eq!(outcome, EditOutcome::Skipped(SkipReason::NoSelection));
            assert_eq!(buffer.lines, vec!["f(a, b)"]);
        }
    }

    #[test]
    fn test_every_command_skips_empty_buffer() {
        for msg in [EditMsg::Duplicate, EditMsg::Delete, EditMsg::Break] {
            let mut buffer = SourceBuffer::default()
                .with_selection(SelectionRange::cursor(Position::zero()));
            let outcome = update(&mut buffer, msg, &IndentSettings::default());
            assert_eq!(outcome, EditOutcome::Skipped(SkipReason::EmptyBuffer));
            assert!(buffer.is_empty());
        }
    }
}
