//! Roster port: the single owner of employee records.

use crate::employee::domain::{Employee, EmployeeId};
use crate::error::ErrorKind;
use thiserror::Error;

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Id-keyed employee registry.
pub trait Roster {
    /// Stores a newly created employee.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateEmployee`] when the file number is
    /// already enrolled.
    fn enrol(&mut self, employee: Employee) -> RosterResult<()>;

    /// Finds an employee by file number.
    fn get(&self, id: EmployeeId) -> Option<&Employee>;

    /// Finds an employee by file number for mutation.
    fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee>;

    /// Returns every enrolled employee ordered by file number.
    fn list(&self) -> Vec<&Employee>;

    /// Returns `true` when the file number is enrolled.
    fn contains(&self, id: EmployeeId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the available employee with the lowest file number.
    fn first_available(&self) -> Option<&Employee> {
        self.list().into_iter().find(|employee| employee.is_available())
    }

    /// Returns the available employee with the fewest recorded delays.
    ///
    /// Ties go to the lowest file number.
    fn least_delayed_available(&self) -> Option<&Employee> {
        self.list()
            .into_iter()
            .filter(|employee| employee.is_available())
            .min_by_key(|employee| (employee.delay_count(), employee.id()))
    }
}

/// Errors returned by roster implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// An employee with the same file number is already enrolled.
    #[error("duplicate employee file number: {0}")]
    DuplicateEmployee(EmployeeId),
}

impl RosterError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateEmployee(_) => ErrorKind::StateConflict,
        }
    }
}
