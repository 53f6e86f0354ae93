//! Line-indexed text buffer handed over by the host for a single command.
//!
//! Lines are stored without their terminators. Columns are character
//! offsets; the helpers at the bottom of this file convert them to byte
//! offsets for slicing.

use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

use super::cursor::Position;
use super::selection::SelectionRange;

/// Lines plus selections. The first selection is the primary one and is the
/// only one the editing commands look at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBuffer {
    pub lines: Vec<String>,
    pub selections: Vec<SelectionRange>,
}

impl SourceBuffer {
    pub fn new(lines: Vec<String>, selections: Vec<SelectionRange>) -> Self {
        Self { lines, selections }
    }

    /// Create a buffer from line strings, with no selection
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            selections: Vec::new(),
        }
    }

    /// Split text on `\n`, dropping a `\r` before each break
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n').map(strip_line_terminators))
    }

    /// Replace the selections with a single range
    pub fn with_selection(mut self, selection: SelectionRange) -> Self {
        self.set_selection(selection);
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line, None for an empty buffer
    pub fn last_line_index(&self) -> Option<usize> {
        self.lines.len().checked_sub(1)
    }

    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Length of a line in characters (0 for lines past the end)
    pub fn line_length(&self, line: usize) -> usize {
        self.line(line).map_or(0, |text| text.chars().count())
    }

    pub fn primary_selection(&self) -> Option<SelectionRange> {
        self.selections.first().copied()
    }

    /// Drop every selection and keep only `selection`
    pub fn set_selection(&mut self, selection: SelectionRange) {
        self.selections.clear();
        self.selections.push(selection);
    }

    /// Drop every selection and place a single cursor
    pub fn set_cursor(&mut self, pos: Position) {
        self.set_selection(SelectionRange::cursor(pos));
    }

    /// Clamp a line index into `[0, last]`
    pub fn clamp_line(&self, line: usize) -> Option<usize> {
        self.last_line_index().map(|last| line.min(last))
    }

    /// Clamp a position onto an existing line and column
    pub fn clamp_position(&self, pos: Position) -> Option<Position> {
        let line = self.clamp_line(pos.line)?;
        let column = pos.column.min(self.line_length(line));
        Some(Position::new(line, column))
    }

    /// Clamp both ends of a range; the result is still ordered
    pub fn clamp_selection(&self, selection: SelectionRange) -> Option<SelectionRange> {
        let start = self.clamp_position(selection.start)?;
        let end = self.clamp_position(selection.end)?;
        Some(SelectionRange::new(start, end))
    }

    /// Text covered by a range, lines joined with `\n`
    pub fn span_text(&self, selection: SelectionRange) -> Option<String> {
        let selection = self.clamp_selection(selection)?;
        let (start, end) = (selection.start, selection.end);
        let first = self.line(start.line)?;

        if selection.is_single_line() {
            return Some(slice_columns(first, start.column..end.column).to_string());
        }

        let last = self.line(end.line)?;
        let mut parts = vec![split_at_column(first, start.column).1];
        parts.extend(self.lines[start.line + 1..end.line].iter().map(String::as_str));
        parts.push(split_at_column(last, end.column).0);
        Some(parts.join("\n"))
    }

    pub fn insert_line(&mut self, index: usize, text: impl Into<String>) {
        let index = index.min(self.lines.len());
        self.lines.insert(index, text.into());
    }

    /// Insert several lines in order starting at `index`
    pub fn insert_lines<I>(&mut self, index: usize, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        let index = index.min(self.lines.len());
        self.lines.splice(index..index, lines);
    }

    pub fn replace_line(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = text.into();
        }
    }

    /// Remove an inclusive range of lines, returning how many were removed
    pub fn remove_lines(&mut self, range: RangeInclusive<usize>) -> usize {
        let Some(last) = self.last_line_index() else {
            return 0;
        };
        let start = (*range.start()).min(last);
        let end = (*range.end()).min(last);
        if end < start {
            return 0;
        }
        self.lines.drain(start..=end).count()
    }

    /// Full content joined with `\n`
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Convert a char offset to a byte offset, saturating at the end of `text`
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split a line at a character column
pub fn split_at_column(text: &str, column: usize) -> (&str, &str) {
    text.split_at(char_to_byte(text, column))
}

/// Slice a line by character columns, clamped to the line
pub fn slice_columns(text: &str, range: Range<usize>) -> &str {
    let start = char_to_byte(text, range.start);
    let end = char_to_byte(text, range.end.max(range.start));
    &text[start..end]
}

/// Strip any trailing `\r` / `\n` characters
pub fn strip_line_terminators(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}
