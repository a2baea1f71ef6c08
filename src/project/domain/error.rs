//! Error types for project and task operations.

use super::ProjectId;
use crate::employee::domain::EmployeeId;
use crate::error::ErrorKind;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by project and task operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The estimated duration is shorter than half a day.
    #[error("task '{title}' must last at least half a day, got {days}")]
    DurationBelowMinimum {
        /// Offending task title.
        title: String,
        /// Rejected duration in days.
        days: f64,
    },

    /// The delay is negative or not a finite amount.
    #[error("delay for task '{title}' must be a non-negative number of days, got {days}")]
    InvalidDelay {
        /// Offending task title.
        title: String,
        /// Rejected delay in days.
        days: f64,
    },

    /// The client name is empty after trimming.
    #[error("client name must not be empty")]
    EmptyClientName,

    /// The project address is empty after trimming.
    #[error("project address must not be empty")]
    EmptyAddress,

    /// An end date precedes the project start date.
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart {
        /// Project start date.
        start: NaiveDate,
        /// Rejected end date.
        end: NaiveDate,
    },

    /// Shifting the schedule would leave the supported calendar range.
    #[error("schedule cannot be extended by {days} days")]
    ScheduleOutOfRange {
        /// Requested shift in whole days.
        days: u64,
    },

    /// The project is finished and no longer accepts changes.
    #[error("project {0} is finished")]
    ProjectFinished(ProjectId),

    /// No task with the given title exists in the project.
    #[error("task not found: {0}")]
    TaskNotFound(String),

    /// The task already has a current responsible.
    #[error("task '{0}' already has a responsible employee")]
    TaskAlreadyAssigned(String),

    /// The task has no current responsible to replace.
    #[error("task '{0}' has no responsible employee")]
    TaskNotAssigned(String),

    /// The task was finished before.
    #[error("task '{0}' is already finished")]
    TaskAlreadyFinished(String),

    /// The employee is not enrolled in the roster.
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),
}

impl ProjectDomainError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTaskTitle
            | Self::DurationBelowMinimum { .. }
            | Self::InvalidDelay { .. }
            | Self::EmptyClientName
            | Self::EmptyAddress
            | Self::EndBeforeStart { .. }
            | Self::ScheduleOutOfRange { .. } => ErrorKind::Validation,
            Self::ProjectFinished(_)
            | Self::TaskNotFound(_)
            | Self::TaskAlreadyAssigned(_)
            | Self::TaskNotAssigned(_)
            | Self::TaskAlreadyFinished(_)
            | Self::EmployeeNotFound(_) => ErrorKind::StateConflict,
        }
    }
}

/// Error returned while parsing a project status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
