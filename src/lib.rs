//! Duplicator - selection-aware line editing commands
//!
//! This crate provides the buffer model and the three commands a host editor
//! invokes on it: duplicate the cursor's line or the selection, delete the
//! selected lines, and break a parameter list over several lines.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod editable;
pub mod messages;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::{perform, Command, Completion, Invocation};
pub use config::EditorConfig;
pub use editable::{IndentSettings, Position, SelectionRange, SourceBuffer};
pub use messages::EditMsg;
pub use update::{break_parameters, delete, duplicate, update, EditOutcome, SkipReason};
