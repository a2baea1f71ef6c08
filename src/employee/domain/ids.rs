//! Identifier type for the employee domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential employee file number ("legajo").
///
/// Issued once at construction from an [`crate::sequence::IdSequence`] and
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    /// Wraps an already-issued file number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the wrapped file number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for EmployeeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
