//! Selection ranges as handed over by the host editor.

use serde::{Deserialize, Serialize};

use super::cursor::Position;

/// A selected range of text. `start <= end` always holds.
///
/// A range whose start equals its end is a plain cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: Position,
    pub end: Position,
}

impl SelectionRange {
    /// Build a range from two positions given in either order
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Create a collapsed range (cursor with no selection)
    pub fn cursor(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if the range is a cursor (start == end)
    pub fn is_cursor(&self) -> bool {
        self.start == self.end
    }

    /// True when start and end sit on the same line
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Number of line breaks the range crosses (0 for an unordered range)
    pub fn line_span(&self) -> usize {
        self.end.line.saturating_sub(self.start.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_order() {
        let forward = SelectionRange::new(Position::new(0, 0), Position::new(0, 5));
        let backward = SelectionRange::new(Position::new(0, 5), Position::new(0, 0));
        assert_eq!(forward, backward);
        assert_eq!(backward.start, Position::new(0, 0));
        assert_eq!(backward.end, Position::new(0, 5));
    }

    #[test]
    fn test_cursor_is_cursor() {
        let sel = SelectionRange::cursor(Position::new(1, 5));
        assert!(sel.is_cursor());
        assert!(sel.is_single_line());
        assert_eq!(sel.line_span(), 0);
    }

    #[test]
    fn test_multi_line_span() {
        let sel = SelectionRange::new(Position::new(4, 2), Position::new(1, 3));
        assert!(!sel.is_cursor());
        assert!(!sel.is_single_line());
        assert_eq!(sel.line_span(), 3);
    }

    #[test]
    fn test_line_span_of_hand_built_backward_range() {
        let range = SelectionRange {
            start: Position::new(4, 0),
            end: Position::new(1, 2),
        };
        assert_eq!(range.line_span(), 0);
    }
}
