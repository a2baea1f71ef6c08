//! Error classification shared by every bounded context.
//!
//! Each context reports failures through its own `thiserror` enum. Callers
//! that only need to know whether the input was rejected or the entity state
//! forbade the operation use [`ErrorKind`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad classification of a domain or service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The caller supplied invalid input.
    Validation,
    /// The operation is not permitted in the current entity state.
    StateConflict,
}

impl ErrorKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::StateConflict => "state_conflict",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
