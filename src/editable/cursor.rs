//! Position type for the line editing engine.

use serde::{Deserialize, Serialize};

/// A position in the text buffer (line and column, both 0-indexed).
///
/// `column` counts characters, not bytes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Same line, shifted right by `count` characters
    pub const fn offset_column(self, count: usize) -> Self {
        Self::new(self.line, self.column + count)
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Self::new(line, column)
    }
}
