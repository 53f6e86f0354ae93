//! Duplicate the cursor's line or the selected text
//!
//! The primary selection is clamped into the buffer first and then handled
//! by shape:
//!
//! - cursor: the whole line is copied below itself
//! - single-line range: the selected text is repeated right after itself
//! - multi-line range: the selected span is repeated right after itself,
//!   which adds one line per line break in the span
//!
//! In every case the new selection covers the inserted copy.

use crate::editable::{
    split_at_column, strip_line_terminators, Position, SelectionRange, SourceBuffer,
};

use super::{EditOutcome, SkipReason};

pub fn duplicate(buffer: &mut SourceBuffer) -> EditOutcome {
    let Some(selection) = buffer.primary_selection() else {
        tracing::debug!("duplicate: no selection");
        return EditOutcome::Skipped(SkipReason::NoSelection);
    };
    let Some(selection) = buffer.clamp_selection(selection) else {
        tracing::debug!("duplicate: empty buffer");
        return EditOutcome::Skipped(SkipReason::EmptyBuffer);
    };

    let new_selection = if selection.is_cursor() {
        duplicate_line(buffer, selection.start)
    } else if selection.is_single_line() {
        duplicate_inline(buffer, selection)
    } else {
        duplicate_block(buffer, selection)
    };

    tracing::debug!(?selection, ?new_selection, "duplicate: applied");
    buffer.set_selection(new_selection);
    EditOutcome::Applied
}

/// Copy the cursor's line below itself; the cursor follows onto the copy
fn duplicate_line(buffer: &mut SourceBuffer, cursor: Position) -> SelectionRange {
    let text = buffer.line(cursor.line).unwrap_or_default().to_string();
    let next_line = cursor.line + 1;
    buffer.insert_line(next_line, text);

    SelectionRange::cursor(Position::new(next_line, cursor.column))
}

/// `prefix + span + suffix` becomes `prefix + span + span + suffix`
fn duplicate_inline(buffer: &mut SourceBuffer, selection: SelectionRange) -> SelectionRange {
    let (start, end) = (selection.start, selection.end);
    let text = buffer.line(start.line).unwrap_or_default();

    let (prefix, rest) = split_at_column(text, start.column);
    let (span, suffix) = split_at_column(rest, end.column - start.column);
    let span_len = span.chars().count();

    let updated = format!("{prefix}{span}{span}{suffix}");
    buffer.replace_line(start.line, updated);

    SelectionRange::new(end, end.offset_column(span_len))
}

/// Repeat a span that crosses line breaks.
///
/// With the span running from the first line's suffix through the middle
/// lines to the last line's prefix, the copy is spliced in before the last
/// line, which stays intact:
///
/// ```text
/// first                         first
/// middle...            =>       middle...
/// last                          last_prefix + first_suffix
///                               middle...
///                               last
/// ```
fn duplicate_block(buffer: &mut SourceBuffer, selection: SelectionRange) -> SelectionRange {
    let (start, end) = (selection.start, selection.end);
    let line_diff = selection.line_span();

    let first = buffer.line(start.line).unwrap_or_default();
    let last = buffer.line(end.line).unwrap_or_default();
    let (_, first_suffix) = split_at_column(first, start.column);
    let (last_prefix, _) = split_at_column(last, end.column);

    let mut copy = Vec::with_capacity(line_diff);
    copy.push(strip_line_terminators(&format!("{last_prefix}{first_suffix}")).to_string());
    copy.extend(
        buffer.lines[start.line + 1..end.line]
            .iter()
            .map(|line| strip_line_terminators(line).to_string()),
    );
    buffer.insert_lines(end.line, copy);

    SelectionRange::new(end, Position::new(end.line + line_diff, end.column))
}
