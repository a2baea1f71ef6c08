//! Units of work inside a project.

use super::ProjectDomainError;
use crate::billing::BillingPolicy;
use crate::employee::domain::EmployeeId;
use crate::employee::ports::Roster;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Shortest estimated duration a task may have, in days.
pub const MIN_TASK_DURATION_DAYS: f64 = 0.5;

/// A titled unit of work.
///
/// Tasks compare and hash by title only; a project holds at most one task
/// per title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    title: String,
    description: String,
    estimated_duration: f64,
    delay: f64,
    finished: bool,
    current_responsible: Option<EmployeeId>,
    historical_responsible: Option<EmployeeId>,
}

impl Task {
    /// Creates an unstaffed, unfinished task without delay.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTaskTitle`] for a blank title and
    /// [`ProjectDomainError::DurationBelowMinimum`] when the estimate is
    /// shorter than [`MIN_TASK_DURATION_DAYS`] or not finite.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_days: f64,
    ) -> Result<Self, ProjectDomainError> {
        let raw = title.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ProjectDomainError::EmptyTaskTitle);
        }
        if !estimated_days.is_finite() || estimated_days < MIN_TASK_DURATION_DAYS {
            return Err(ProjectDomainError::DurationBelowMinimum {
                title: normalized.to_owned(),
                days: estimated_days,
            });
        }
        Ok(Self {
            title: normalized.to_owned(),
            description: description.into(),
            estimated_duration: estimated_days,
            delay: 0.0,
            finished: false,
            current_responsible: None,
            historical_responsible: None,
        })
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the estimated duration in days.
    #[must_use]
    pub const fn estimated_duration(&self) -> f64 {
        self.estimated_duration
    }

    /// Returns the recorded delay in days.
    #[must_use]
    pub const fn delay(&self) -> f64 {
        self.delay
    }

    /// Returns the estimate plus the accumulated delay.
    #[must_use]
    pub const fn actual_duration(&self) -> f64 {
        self.estimated_duration + self.delay
    }

    /// Returns whether any delay was recorded.
    #[must_use]
    pub const fn has_delay(&self) -> bool {
        self.delay > 0.0
    }

    /// Returns whether the task was finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the employee currently working on the task.
    #[must_use]
    pub const fn current_responsible(&self) -> Option<EmployeeId> {
        self.current_responsible
    }

    /// Returns the employee most recently made responsible for the task.
    ///
    /// Survives release on finish and is the employee the task is billed to.
    #[must_use]
    pub const fn historical_responsible(&self) -> Option<EmployeeId> {
        self.historical_responsible
    }

    /// Returns whether an employee currently works on the task.
    #[must_use]
    pub const fn has_responsible(&self) -> bool {
        self.current_responsible.is_some()
    }

    /// Returns `"Finished"` or `"Pending"`.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.finished { "Finished" } else { "Pending" }
    }

    /// Prices the task against the billed employee.
    ///
    /// A task that never had a responsible costs nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmployeeNotFound`] when the billed
    /// employee is missing from the roster.
    pub fn cost(
        &self,
        roster: &impl Roster,
        policy: &BillingPolicy,
    ) -> Result<f64, ProjectDomainError> {
        let Some(id) = self.historical_responsible else {
            return Ok(0.0);
        };
        let employee = roster
            .get(id)
            .ok_or(ProjectDomainError::EmployeeNotFound(id))?;
        Ok(employee.task_cost_under(policy, self.actual_duration(), self.has_delay()))
    }

    /// Sets the current responsible.
    ///
    /// `Some` also becomes the historical responsible; `None` leaves the
    /// historical responsible in place.
    pub const fn set_responsible(&mut self, employee: Option<EmployeeId>) {
        self.current_responsible = employee;
        if employee.is_some() {
            self.historical_responsible = employee;
        }
    }

    /// Replaces the recorded delay with `days`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidDelay`] when `days` is negative
    /// or not finite; the previous delay is kept.
    pub fn record_delay(&mut self, days: f64) -> Result<(), ProjectDomainError> {
        if !days.is_finite() || days < 0.0 {
            return Err(ProjectDomainError::InvalidDelay {
                title: self.title.clone(),
                days,
            });
        }
        self.delay = days;
        Ok(())
    }

    /// Marks the task as finished.
    pub const fn finish(&mut self) {
        self.finished = true;
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}
