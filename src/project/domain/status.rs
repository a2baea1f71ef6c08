//! Project lifecycle status.

use super::ParseProjectStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived lifecycle status of a project.
///
/// `Pending` and `Active` are recomputed from task coverage; `Finished` is
/// only reached through an explicit finish and is never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// At least one task still needs an employee, or there are no tasks.
    Pending,
    /// Every task is finished or has a current responsible.
    Active,
    /// The project was closed.
    Finished,
}

impl ProjectStatus {
    /// Returns the canonical upper-case representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Finished => "FINISHED",
        }
    }

    /// Returns `true` for states that admit no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "ACTIVE" => Ok(Self::Active),
            "FINISHED" => Ok(Self::Finished),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}
