//! Error types for employee domain validation.

use super::EmployeeId;
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned while constructing or updating employees.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeDomainError {
    /// The employee name is empty after trimming.
    #[error("employee name must not be empty")]
    EmptyName,

    /// The rate is negative or not a finite amount.
    #[error("rate must be a non-negative amount, got {0}")]
    InvalidRate(f64),

    /// The staff category is not one of the recognised tiers.
    #[error("invalid staff category '{0}', expected INITIAL, TECHNICIAN or EXPERT")]
    InvalidCategory(String),

    /// A staff-only operation was attempted on a contractor.
    #[error("employee {0} is not a staff employee")]
    NotStaff(EmployeeId),
}

impl EmployeeDomainError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName | Self::InvalidRate(_) | Self::InvalidCategory(_) => {
                ErrorKind::Validation
            }
            Self::NotStaff(_) => ErrorKind::StateConflict,
        }
    }
}
