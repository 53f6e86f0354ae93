//! Document model - a file on disk as a line buffer
//!
//! Files are read through a `Rope`, split into terminator-free lines, and
//! written back with the line ending and trailing newline they were loaded
//! with.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ropey::Rope;

use crate::editable::SourceBuffer;

/// Line terminator used when writing a document back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub buffer: SourceBuffer,
    pub file_path: Option<PathBuf>,
    pub line_ending: LineEnding,
    /// The text ended with a line break
    pub trailing_newline: bool,
}

impl Document {
    /// Create a document from in-memory text
    pub fn from_text(text: &str) -> Self {
        Self::from_rope(&Rope::from_str(text))
    }

    /// Load a document from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let rope = Rope::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut document = Self::from_rope(&rope);
        document.file_path = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            lines = document.buffer.line_count(),
            "Loaded document"
        );
        Ok(document)
    }

    /// Lines break on `\n` only. CRLF is taken as the document's line ending
    /// when every break is CRLF; otherwise any `\r` stays in the line text so
    /// mixed endings are written back byte for byte.
    fn from_rope(rope: &Rope) -> Self {
        let mut lines: Vec<String> = rope.lines().map(|line| line.to_string()).collect();

        let mut breaks = 0;
        let mut crlf_breaks = 0;
        for line in lines.iter_mut() {
            if line.ends_with('\n') {
                line.pop();
                breaks += 1;
                if line.ends_with('\r') {
                    crlf_breaks += 1;
                }
            }
        }

        let line_ending = if breaks > 0 && crlf_breaks == breaks {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        if line_ending == LineEnding::CrLf {
            // Every line but the last was followed by a break
            let broken = lines.len().saturating_sub(1);
            for line in &mut lines[..broken] {
                line.pop();
            }
        }

        // A rope ending in a line break reports one extra, empty line
        let trailing_newline = lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty());
        if trailing_newline {
            lines.pop();
        }

        Self {
            buffer: SourceBuffer::from_lines(lines),
            file_path: None,
            line_ending,
            trailing_newline,
        }
    }

    /// Render the buffer with the document's line conventions
    pub fn text(&self) -> String {
        let mut text = self.buffer.lines.join(self.line_ending.as_str());
        if self.trailing_newline && !self.buffer.is_empty() {
            text.push_str(self.line_ending.as_str());
        }
        text
    }

    /// Write the document back to where it was loaded from
    pub fn save(&self) -> Result<()> {
        let path = self
            .file_path
            .as_deref()
            .context("Document has no file path")?;
        self.save_as(path)
    }

    pub fn save_as(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved document");
        Ok(())
    }
}
