//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use duplicator::editable::{Position, SelectionRange, SourceBuffer};

/// Create a test buffer from `\n`-separated text with a cursor
pub fn test_buffer(text: &str, line: usize, column: usize) -> SourceBuffer {
    SourceBuffer::from_text(text)
        .with_selection(SelectionRange::cursor(Position::new(line, column)))
}

/// Create a test buffer with a selection from (start_line, start_col) to (end_line, end_col)
pub fn test_buffer_with_selection(
    text: &str,
    start_line: usize,
    start_col: usize,
    end_line: usize,
    end_col: usize,
) -> SourceBuffer {
    SourceBuffer::from_text(text).with_selection(SelectionRange::new(
        Position::new(start_line, start_col),
        Position::new(end_line, end_col),
    ))
}

/// Buffer content joined with `\n`
pub fn buffer_to_string(buffer: &SourceBuffer) -> String {
    buffer.content()
}

/// Primary selection as ((line, col), (line, col))
pub fn selection_tuple(buffer: &SourceBuffer) -> ((usize, usize), (usize, usize)) {
    let sel = buffer.primary_selection().expect("buffer has a selection");
    (
        (sel.start.line, sel.start.column),
        (sel.end.line, sel.end.column),
    )
}

/// Char offset of a position within `buffer.content()`
pub fn char_offset(buffer: &SourceBuffer, pos: Position) -> usize {
    let before: usize = buffer.lines[..pos.line]
        .iter()
        .map(|line| line.chars().count() + 1)
        .sum();
    before + pos.column
}
