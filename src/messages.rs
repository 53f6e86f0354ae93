//! Message types for the line editing commands
//!
//! Every buffer change flows through [`EditMsg`] and
//! [`crate::update::update`].

use serde::{Deserialize, Serialize};

/// Buffer editing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditMsg {
    /// Duplicate the cursor's line or the selected text
    Duplicate,
    /// Delete every line touched by the selection
    Delete,
    /// Split the parameter list on the cursor's line over several lines
    Break,
}
