//! Delete every line touched by the primary selection

use crate::editable::SourceBuffer;

use super::{EditOutcome, SkipReason};

/// Remove lines `start.line..=end.line` of the primary selection.
///
/// Both indices are clamped to the buffer and the end is raised to the start
/// when clamping inverted them, so at least one line goes. The selection
/// collapses to a cursor at the original start position, which is not
/// re-clamped to the shortened buffer.
pub fn delete(buffer: &mut SourceBuffer) -> EditOutcome {
    let Some(selection) = buffer.primary_selection() else {
        tracing::debug!("delete: no selection");
        return EditOutcome::Skipped(SkipReason::NoSelection);
    };
    let Some(last) = buffer.last_line_index() else {
        tracing::debug!("delete: empty buffer");
        return EditOutcome::Skipped(SkipReason::EmptyBuffer);
    };

    let start_index = selection.start.line.min(last);
    let end_index = selection.end.line.min(last).max(start_index);

    let removed = buffer.remove_lines(start_index..=end_index);
    tracing::debug!(start_index, end_index, removed, "delete: removed lines");

    buffer.set_cursor(selection.start);
    EditOutcome::Applied
}
