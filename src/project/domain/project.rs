//! Project aggregate root.

use super::{Client, ProjectDomainError, ProjectId, ProjectStatus, Task};
use crate::billing::BillingPolicy;
use crate::employee::domain::EmployeeId;
use crate::employee::ports::Roster;
use crate::sequence::IdSequence;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// A construction project and its tasks.
///
/// Every operation validates all of its preconditions before changing any
/// state, so a rejected call leaves the project and the roster untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    client: Client,
    address: String,
    start_date: NaiveDate,
    estimated_end_date: NaiveDate,
    actual_end_date: NaiveDate,
    status: ProjectStatus,
    tasks: BTreeMap<String, Task>,
    assigned_employees: BTreeSet<EmployeeId>,
    employee_history: Vec<EmployeeId>,
    billing_policy: BillingPolicy,
}

impl Project {
    /// Creates a pending project without tasks.
    ///
    /// The actual end date starts equal to the estimated end date. The id is
    /// drawn from `ids` only once validation has passed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyAddress`] for a blank address and
    /// [`ProjectDomainError::EndBeforeStart`] when the estimated end precedes
    /// the start.
    pub fn new(
        client: Client,
        address: impl Into<String>,
        start_date: NaiveDate,
        estimated_end_date: NaiveDate,
        ids: &mut IdSequence,
    ) -> Result<Self, ProjectDomainError> {
        let raw = address.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ProjectDomainError::EmptyAddress);
        }
        if estimated_end_date < start_date {
            return Err(ProjectDomainError::EndBeforeStart {
                start: start_date,
                end: estimated_end_date,
            });
        }
        Ok(Self {
            id: ProjectId::new(ids.issue()),
            client,
            address: normalized.to_owned(),
            start_date,
            estimated_end_date,
            actual_end_date: estimated_end_date,
            status: ProjectStatus::Pending,
            tasks: BTreeMap::new(),
            assigned_employees: BTreeSet::new(),
            employee_history: Vec::new(),
            billing_policy: BillingPolicy::standard(),
        })
    }

    /// Prices the project under `policy` instead of the standard rates.
    #[must_use]
    pub const fn with_billing_policy(mut self, policy: BillingPolicy) -> Self {
        self.billing_policy = policy;
        self
    }

    /// Returns the project number.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the site address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the estimated end date.
    #[must_use]
    pub const fn estimated_end_date(&self) -> NaiveDate {
        self.estimated_end_date
    }

    /// Returns the actual end date.
    #[must_use]
    pub const fn actual_end_date(&self) -> NaiveDate {
        self.actual_end_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns whether the project was finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the pricing rules.
    #[must_use]
    pub const fn billing_policy(&self) -> &BillingPolicy {
        &self.billing_policy
    }

    /// Iterates over the tasks in title order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Finds a task by title.
    #[must_use]
    pub fn task(&self, title: &str) -> Option<&Task> {
        self.tasks.get(title)
    }

    /// Returns every task title in title order.
    #[must_use]
    pub fn task_titles(&self) -> Vec<&str> {
        self.tasks.keys().map(String::as_str).collect()
    }

    /// Returns the unfinished tasks that nobody currently works on.
    #[must_use]
    pub fn unassigned_tasks(&self) -> Vec<&Task> {
        self.tasks
            .values()
            .filter(|task| !task.is_finished() && !task.has_responsible())
            .collect()
    }

    /// Returns whether any unfinished task lacks a responsible.
    #[must_use]
    pub fn has_unassigned_tasks(&self) -> bool {
        self.tasks
            .values()
            .any(|task| !task.is_finished() && !task.has_responsible())
    }

    /// Returns the employees currently working on the project.
    #[must_use]
    pub const fn assigned_employees(&self) -> &BTreeSet<EmployeeId> {
        &self.assigned_employees
    }

    /// Returns every employee that ever worked on the project, in order of
    /// first assignment.
    #[must_use]
    pub fn employee_history(&self) -> &[EmployeeId] {
        &self.employee_history
    }

    /// Returns whether any task was delayed or the project finished late.
    #[must_use]
    pub fn has_delays(&self) -> bool {
        self.tasks.values().any(Task::has_delay)
            || (self.is_finished() && self.actual_end_date > self.estimated_end_date)
    }

    /// Adds a task and pushes both end dates back by its whole days.
    ///
    /// A task with an existing title is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProjectFinished`] on a finished project,
    /// or the validation error from [`Task::new`].
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_days: f64,
    ) -> Result<(), ProjectDomainError> {
        self.ensure_open()?;
        let task = Task::new(title, description, estimated_days)?;
        self.shift_schedule(whole_days(estimated_days))?;
        debug!(project = %self.id, task = task.title(), "task added");
        self.tasks.insert(task.title().to_owned(), task);
        self.refresh_status();
        Ok(())
    }

    /// Adds a task without moving the schedule.
    ///
    /// Used while a project is being registered; see
    /// [`Project::cover_planned_work`].
    ///
    /// # Errors
    ///
    /// Same as [`Project::add_task`].
    pub fn add_initial_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_days: f64,
    ) -> Result<(), ProjectDomainError> {
        self.ensure_open()?;
        let task = Task::new(title, description, estimated_days)?;
        self.tasks.insert(task.title().to_owned(), task);
        self.refresh_status();
        Ok(())
    }

    /// Extends both end dates so the schedule covers the whole days of
    /// every task counted from the start date.
    ///
    /// Dates that already cover the planned work are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProjectFinished`] on a finished project
    /// and [`ProjectDomainError::ScheduleOutOfRange`] when the covering date
    /// does not exist.
    pub fn cover_planned_work(&mut self) -> Result<(), ProjectDomainError> {
        self.ensure_open()?;
        let planned: u64 = self
            .tasks
            .values()
            .map(|task| whole_days(task.estimated_duration()))
            .sum();
        let covered = self
            .start_date
            .checked_add_days(Days::new(planned))
            .ok_or(ProjectDomainError::ScheduleOutOfRange { days: planned })?;
        if covered > self.estimated_end_date {
            self.estimated_end_date = covered;
            self.actual_end_date = covered;
        }
        Ok(())
    }

    /// Makes `employee` responsible for the task titled `title`.
    ///
    /// The employee is marked unavailable and joins the project history.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProjectFinished`],
    /// [`ProjectDomainError::TaskNotFound`],
    /// [`ProjectDomainError::TaskAlreadyAssigned`] or
    /// [`ProjectDomainError::EmployeeNotFound`].
    pub fn assign_employee(
        &mut self,
        title: &str,
        employee: EmployeeId,
        roster: &mut impl Roster,
    ) -> Result<(), ProjectDomainError> {
        self.ensure_open()?;
        let task = self
            .tasks
            .get_mut(title)
            .ok_or_else(|| ProjectDomainError::TaskNotFound(title.to_owned()))?;
        if task.has_responsible() {
            return Err(ProjectDomainError::TaskAlreadyAssigned(title.to_owned()));
        }
        let record = roster
            .get_mut(employee)
            .ok_or(ProjectDomainError::EmployeeNotFound(employee))?;
        record.assign();
        task.set_responsible(Some(employee));
        self.assigned_employees.insert(employee);
        self.remember(employee);
        debug!(project = %self.id, task = title, %employee, "employee assigned");
        self.refresh_status();
        Ok(())
    }

    /// Hands the task titled `title` over to `employee`.
    ///
    /// The previous responsible is released and leaves the assigned set; the
    /// new one is marked unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProjectFinished`],
    /// [`ProjectDomainError::TaskNotFound`],
    /// [`ProjectDomainError::TaskNotAssigned`] or
    /// [`ProjectDomainError::EmployeeNotFound`] for either employee.
    pub fn reassign_employee(
        &mut self,
        title: &str,
        employee: EmployeeId,
        roster: &mut impl Roster,
    ) -> Result<(), ProjectDomainError> {
        self.ensure_open()?;
        let task = self
            .tasks
            .get_mut(title)
            .ok_or_else(|| ProjectDomainError::TaskNotFound(title.to_owned()))?;
        let previous = task
            .current_responsible()
            .ok_or_else(|| ProjectDomainError::TaskNotAssigned(title.to_owned()))?;
        for id in [previous, employee] {
            if !roster.contains(id) {
                return Err(ProjectDomainError::EmployeeNotFound(id));
            }
        }
        if let Some(record) = roster.get_mut(previous) {
            record.release();
        }
        if let Some(record) = roster.get_mut(employee) {
            record.assign();
        }
        task.set_responsible(Some(employee));
        self.assigned_employees.remove(&previous);
        self.assigned_employees.insert(employee);
        self.remember(employee);
        debug!(project = %self.id, task = title, %previous, %employee, "employee reassigned");
        Ok(())
    }

    /// Records `days` of delay on the task titled `title`.
    ///
    /// The new value replaces any earlier delay on the task. The schedule
    /// is left alone. A call that takes a staffed task from no delay to
    /// some delay counts against its current responsible.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProjectFinished`],
    /// [`ProjectDomainError::TaskNotFound`],
    /// [`ProjectDomainError::InvalidDelay`] or
    /// [`ProjectDomainError::EmployeeNotFound`].
    pub fn record_delay(
        &mut self,
        title: &str,
        days: f64,
        roster: &mut impl Roster,
    ) -> Result<(), ProjectDomainError> {
        self.ensure_open()?;
        let task = self
            .tasks
            .get(title)
            .ok_or_else(|| ProjectDomainError::TaskNotFound(title.to_owned()))?;
        let mut delayed = task.clone();
        delayed.record_delay(days)?;
        let responsible = task.current_responsible();
        if let Some(id) = responsible
            && !roster.contains(id)
        {
            return Err(ProjectDomainError::EmployeeNotFound(id));
        }
        let first_delay = !task.has_delay() && delayed.has_delay();
        self.tasks.insert(title.to_owned(), delayed);

        if first_delay
            && let Some(id) = responsible
            && let Some(record) = roster.get_mut(id)
        {
            record.increment_delays();
            debug!(
                project = %self.id,
                task = title,
                employee = %id,
                "delay counted against employee"
            );
        }
        Ok(())
    }

    /// Marks the task titled `title` as finished.
    ///
    /// The current responsible, if any, is released, records the task in
    /// their history and leaves the assigned set. Allowed on a finished
    /// project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`],
    /// [`ProjectDomainError::TaskAlreadyFinished`] or
    /// [`ProjectDomainError::EmployeeNotFound`].
    pub fn finish_task(
        &mut self,
        title: &str,
        roster: &mut impl Roster,
    ) -> Result<(), ProjectDomainError> {
        let task = self
            .tasks
            .get_mut(title)
            .ok_or_else(|| ProjectDomainError::TaskNotFound(title.to_owned()))?;
        if task.is_finished() {
            return Err(ProjectDomainError::TaskAlreadyFinished(title.to_owned()));
        }
        if let Some(id) = task.current_responsible()
            && !roster.contains(id)
        {
            return Err(ProjectDomainError::EmployeeNotFound(id));
        }
        let responsible = task.current_responsible();
        task.finish();
        task.set_responsible(None);
        if let Some(id) = responsible {
            if let Some(record) = roster.get_mut(id) {
                record.release();
                record.record_completed_task(task.title());
            }
            self.assigned_employees.remove(&id);
        }
        debug!(project = %self.id, task = title, "task finished");
        self.refresh_status();
        Ok(())
    }

    /// Closes the project on `actual_end_date`.
    ///
    /// Every current responsible is released and the assigned set is
    /// emptied. Open tasks stay unfinished.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EndBeforeStart`] when the date precedes
    /// the start and [`ProjectDomainError::EmployeeNotFound`] when a current
    /// responsible is missing from the roster.
    pub fn finish(
        &mut self,
        actual_end_date: NaiveDate,
        roster: &mut impl Roster,
    ) -> Result<(), ProjectDomainError> {
        if actual_end_date < self.start_date {
            return Err(ProjectDomainError::EndBeforeStart {
                start: self.start_date,
                end: actual_end_date,
            });
        }
        if let Some(missing) = self
            .tasks
            .values()
            .filter_map(Task::current_responsible)
            .find(|id| !roster.contains(*id))
        {
            return Err(ProjectDomainError::EmployeeNotFound(missing));
        }
        for task in self.tasks.values_mut() {
            if let Some(id) = task.current_responsible()
                && let Some(record) = roster.get_mut(id)
            {
                record.release();
            }
            task.set_responsible(None);
        }
        self.assigned_employees.clear();
        self.actual_end_date = actual_end_date;
        self.transition(ProjectStatus::Finished);
        Ok(())
    }

    /// Returns the billed total: the sum of task costs times the on-time or
    /// delayed markup.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmployeeNotFound`] when a billed
    /// employee is missing from the roster.
    pub fn total_cost(&self, roster: &impl Roster) -> Result<f64, ProjectDomainError> {
        let subtotal = self
            .tasks
            .values()
            .map(|task| task.cost(roster, &self.billing_policy))
            .sum::<Result<f64, _>>()?;
        Ok(subtotal * self.billing_policy.markup(self.has_delays()))
    }

    const fn ensure_open(&self) -> Result<(), ProjectDomainError> {
        if self.status.is_terminal() {
            return Err(ProjectDomainError::ProjectFinished(self.id));
        }
        Ok(())
    }

    fn shift_schedule(&mut self, days: u64) -> Result<(), ProjectDomainError> {
        let out_of_range = ProjectDomainError::ScheduleOutOfRange { days };
        let estimated = self
            .estimated_end_date
            .checked_add_days(Days::new(days))
            .ok_or_else(|| out_of_range.clone())?;
        let actual = self
            .actual_end_date
            .checked_add_days(Days::new(days))
            .ok_or(out_of_range)?;
        self.estimated_end_date = estimated;
        self.actual_end_date = actual;
        Ok(())
    }

    fn remember(&mut self, employee: EmployeeId) {
        if !self.employee_history.contains(&employee) {
            self.employee_history.push(employee);
        }
    }

    fn refresh_status(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        let covered = !self.tasks.is_empty()
            && self
                .tasks
                .values()
                .all(|task| task.is_finished() || task.has_responsible());
        let next = if covered {
            ProjectStatus::Active
        } else {
            ProjectStatus::Pending
        };
        self.transition(next);
    }

    fn transition(&mut self, next: ProjectStatus) {
        if self.status != next {
            debug!(project = %self.id, from = %self.status, to = %next, "project status changed");
            self.status = next;
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "durations are validated finite and non-negative before rounding"
)]
fn whole_days(days: f64) -> u64 {
    days.ceil() as u64
}
