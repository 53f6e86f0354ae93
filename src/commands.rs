//! Host command dispatch
//!
//! The host editor invokes commands by identifier, `<bundle>.Duplicate`,
//! `<bundle>.Delete` or `<bundle>.Break`, hands over the buffer, and waits
//! for completion. Completion is always successful: an unknown identifier
//! or a command that finds nothing to do leaves the buffer untouched.

use std::str::FromStr;

use serde::Serialize;

use crate::editable::{IndentSettings, SourceBuffer};
use crate::messages::EditMsg;
use crate::update::{update, EditOutcome};

/// Commands the host can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    Duplicate,
    Delete,
    Break,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Duplicate, Command::Delete, Command::Break];

    /// Identifier suffix registered with the host
    pub fn name(self) -> &'static str {
        match self {
            Command::Duplicate => "Duplicate",
            Command::Delete => "Delete",
            Command::Break => "Break",
        }
    }

    /// Get a display name for this command (for menus)
    pub fn display_name(self) -> &'static str {
        match self {
            Command::Duplicate => "Duplicate Line or Selection",
            Command::Delete => "Delete Lines",
            Command::Break => "Break Parameter List",
        }
    }

    /// Full identifier as registered under `bundle`
    pub fn identifier(self, bundle: &str) -> String {
        format!("{}.{}", bundle, self.name())
    }

    /// Resolve `<bundle>.<Name>`; anything else is not ours
    pub fn from_identifier(identifier: &str, bundle: &str) -> Option<Self> {
        let name = identifier.strip_prefix(bundle)?.strip_prefix('.')?;
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn to_msg(self) -> EditMsg {
        match self {
            Command::Duplicate => EditMsg::Duplicate,
            Command::Delete => EditMsg::Delete,
            Command::Break => EditMsg::Break,
        }
    }
}

/// Error for command names that do not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl std::fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown command: {} (expected duplicate, delete or break)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCommand {}

// Short, case-insensitive names for the command line
impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// One host request: which command, under which bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command_identifier: String,
    pub bundle_identifier: String,
}

impl Invocation {
    pub fn new(command_identifier: impl Into<String>, bundle_identifier: impl Into<String>) -> Self {
        Self {
            command_identifier: command_identifier.into(),
            bundle_identifier: bundle_identifier.into(),
        }
    }

    pub fn command(&self) -> Option<Command> {
        Command::from_identifier(&self.command_identifier, &self.bundle_identifier)
    }
}

/// What the host is told once an invocation returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// The resolved command, None for identifiers that are not ours
    pub command: Option<Command>,
    /// None when no command ran
    pub outcome: Option<EditOutcome>,
}

impl Completion {
    /// Always true; failures are never surfaced to the host
    pub fn is_success(&self) -> bool {
        true
    }
}

/// Resolve the invocation and run it against `buffer`
pub fn perform(
    invocation: &Invocation,
    buffer: &mut SourceBuffer,
    indent: &IndentSettings,
) -> Completion {
    let Some(command) = invocation.command() else {
        tracing::debug!(
            identifier = %invocation.command_identifier,
            "Ignoring unknown command identifier"
        );
        return Completion {
            command: None,
            outcome: None,
        };
    };

    let outcome = update(buffer, command.to_msg(), indent);
    Completion {
        command: Some(command),
        outcome: Some(outcome),
    }
}
