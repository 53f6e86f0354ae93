//! Buffer model for the line editing commands.
//!
//! The host hands over a [`SourceBuffer`] (lines without terminators plus a
//! list of [`SelectionRange`]s) for one command invocation. Commands mutate
//! it in place and the host re-renders from the result.
//!
//! # Example
//!
//! ```
//! use duplicator::editable::{Position, SelectionRange, SourceBuffer};
//!
//! let buffer = SourceBuffer::from_lines(["let x = 1"])
//!     .with_selection(SelectionRange::cursor(Position::new(0, 0)));
//!
//! assert_eq!(buffer.line_count(), 1);
//! assert!(buffer.primary_selection().unwrap().is_cursor());
//! ```

mod buffer;
mod cursor;
mod indent;
mod selection;

pub use buffer::{
    char_to_byte, slice_columns, split_at_column, strip_line_terminators, SourceBuffer,
};
pub use cursor::Position;
pub use indent::{leading_indent, IndentSettings};
pub use selection::SelectionRange;
