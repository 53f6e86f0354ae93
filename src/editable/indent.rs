//! Buffer-level indentation settings.

use serde::{Deserialize, Serialize};

const TAB: char = '\t';
const SPACE: char = ' ';

/// How the host buffer indents: one tab per level, or `width` spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndentSettings {
    pub width: usize,
    pub uses_tabs: bool,
}

impl IndentSettings {
    pub const fn spaces(width: usize) -> Self {
        Self {
            width,
            uses_tabs: false,
        }
    }

    pub const fn tabs(width: usize) -> Self {
        Self {
            width,
            uses_tabs: true,
        }
    }

    /// One level of indentation
    pub fn unit(&self) -> String {
        if self.uses_tabs {
            TAB.to_string()
        } else {
            SPACE.to_string().repeat(self.width)
        }
    }
}

impl Default for IndentSettings {
    fn default() -> Self {
        Self::spaces(4)
    }
}

/// Leading run of tabs and spaces
pub fn leading_indent(line: &str) -> &str {
    let end = line
        .find(|ch: char| ch != TAB && ch != SPACE)
        .unwrap_or(line.len());
    &line[..end]
}
