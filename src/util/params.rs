//! Bracket-aware splitting of parameter lists
//!
//! Splits the interior of a parenthesized list on commas that are not nested
//! inside `()`, `{}` or `[]`. This works on raw characters only; string
//! literals and comments are not recognized.

const COMMA: char = ',';

/// Nesting depth per bracket kind
///
/// Counters are signed so that a stray closing bracket does not wrap; once a
/// counter goes negative no further top-level commas are found on the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BracketDepth {
    pub round: i32,
    pub curly: i32,
    pub square: i32,
}

impl BracketDepth {
    /// Update the counters for one character
    pub fn track(&mut self, ch: char) {
        match ch {
            '(' => self.round += 1,
            ')' => self.round -= 1,
            '{' => self.curly += 1,
            '}' => self.curly -= 1,
            '[' => self.square += 1,
            ']' => self.square -= 1,
            _ => {}
        }
    }

    /// Not nested inside any bracket
    pub fn is_top_level(&self) -> bool {
        self.round == 0 && self.curly == 0 && self.square == 0
    }
}

/// Split `body` on top-level commas.
///
/// Each parameter keeps its separating comma, is trimmed, and is prefixed
/// with `indent`. Whatever follows the last top-level comma is flushed as the
/// final parameter. A blank body yields no parameters.
pub fn split_parameters(body: &str, indent: &str) -> Vec<String> {
    let mut depth = BracketDepth::default();
    let mut params = Vec::new();
    let mut current = String::new();

    for ch in body.chars() {
        depth.track(ch);
        current.push(ch);

        if ch == COMMA && depth.is_top_level() {
            params.push(format!("{}{}", indent, current.trim()));
            current.clear();
        }
    }

    let rest = current.trim();
    if !rest.is_empty() {
        params.push(format!("{}{}", indent, rest));
    }

    tracing::trace!(count = params.len(), "split parameter list");
    params
}
