//! Staff seniority tiers.

use super::EmployeeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seniority tier of a staff employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffCategory {
    /// Entry-level staff.
    Initial,
    /// Qualified technician.
    Technician,
    /// Senior expert.
    Expert,
}

impl StaffCategory {
    /// Returns the canonical upper-case representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "INITIAL",
            Self::Technician => "TECHNICIAN",
            Self::Expert => "EXPERT",
        }
    }
}

impl fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StaffCategory {
    type Error = EmployeeDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_uppercase();
        match normalized.as_str() {
            "INITIAL" => Ok(Self::Initial),
            "TECHNICIAN" => Ok(Self::Technician),
            "EXPERT" => Ok(Self::Expert),
            _ => Err(EmployeeDomainError::InvalidCategory(value.to_owned())),
        }
    }
}
