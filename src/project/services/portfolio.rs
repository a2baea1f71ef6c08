//! Portfolio service: registration, staffing and reporting across projects.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::billing::BillingPolicy;
use crate::employee::adapters::memory::InMemoryRoster;
use crate::employee::domain::{Employee, EmployeeDomainError, EmployeeId};
use crate::employee::ports::{Roster, RosterError};
use crate::error::ErrorKind;
use crate::project::adapters::memory::InMemoryProjectCatalogue;
use crate::project::domain::{Client, Project, ProjectDomainError, ProjectId, ProjectStatus, Task};
use crate::project::ports::{CatalogueError, ProjectCatalogue};
use crate::sequence::IdSequence;

use super::summary::{SummaryError, render_summary};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors returned by [`PortfolioService`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PortfolioError {
    /// Employee validation failed.
    #[error(transparent)]
    Employee(#[from] EmployeeDomainError),

    /// A project or task operation failed.
    #[error(transparent)]
    Project(#[from] ProjectDomainError),

    /// The roster rejected the operation.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// The catalogue rejected the operation.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// The summary could not be produced.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// No project with the given number exists.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// No employee with the given file number exists.
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// Every employee is already assigned.
    #[error("no employee is available")]
    NoAvailableEmployee,

    /// The chosen employee is already assigned.
    #[error("employee {0} is not available")]
    EmployeeUnavailable(EmployeeId),

    /// The project cannot be finished while tasks lack a responsible.
    #[error("project {0} still has unassigned tasks")]
    UnassignedTasksRemain(ProjectId),

    /// A project was registered without tasks.
    #[error("a project needs at least one initial task")]
    NoInitialTasks,

    /// A date is not in `yyyy-mm-dd` form.
    #[error("invalid date '{value}', expected yyyy-mm-dd")]
    InvalidDate {
        /// Rejected input.
        value: String,
    },
}

impl PortfolioError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Employee(error) => error.kind(),
            Self::Project(error) => error.kind(),
            Self::Roster(error) => error.kind(),
            Self::Catalogue(error) => error.kind(),
            Self::Summary(error) => error.kind(),
            Self::NoInitialTasks | Self::InvalidDate { .. } => ErrorKind::Validation,
            Self::ProjectNotFound(_)
            | Self::EmployeeNotFound(_)
            | Self::NoAvailableEmployee
            | Self::EmployeeUnavailable(_)
            | Self::UnassignedTasksRemain(_) => ErrorKind::StateConflict,
        }
    }
}

/// A task booked when a project is registered.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSpec {
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Estimated duration in days.
    pub days: f64,
}

impl TaskSpec {
    /// Creates an initial task entry.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, days: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            days,
        }
    }
}

/// Input for [`PortfolioService::register_project`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterProjectRequest {
    client_name: String,
    client_email: Option<String>,
    client_phone: Option<String>,
    address: String,
    start_date: String,
    estimated_end_date: String,
    tasks: Vec<TaskSpec>,
}

impl RegisterProjectRequest {
    /// Creates a request without contact details or tasks.
    ///
    /// Dates are `yyyy-mm-dd` strings and are parsed on registration.
    #[must_use]
    pub fn new(
        client_name: impl Into<String>,
        address: impl Into<String>,
        start_date: impl Into<String>,
        estimated_end_date: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            client_email: None,
            client_phone: None,
            address: address.into(),
            start_date: start_date.into(),
            estimated_end_date: estimated_end_date.into(),
            tasks: Vec::new(),
        }
    }

    /// Sets the client email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.client_email = Some(email.into());
        self
    }

    /// Sets the client phone.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.client_phone = Some(phone.into());
        self
    }

    /// Appends an initial task.
    #[must_use]
    pub fn with_task(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        days: f64,
    ) -> Self {
        self.tasks.push(TaskSpec::new(title, description, days));
        self
    }

    /// Appends several initial tasks.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = TaskSpec>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Returns the client name.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Returns the initial tasks.
    #[must_use]
    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }
}

/// Coordinates employees and projects.
///
/// Owns the roster, the project catalogue and the id sequences both draw
/// from. Every mutating call validates before touching state, so a failed
/// call leaves the portfolio as it was.
#[derive(Debug, Clone)]
pub struct PortfolioService<R = InMemoryRoster, C = InMemoryProjectCatalogue>
where
    R: Roster,
    C: ProjectCatalogue,
{
    roster: R,
    catalogue: C,
    employee_ids: IdSequence,
    project_ids: IdSequence,
    billing_policy: BillingPolicy,
}

impl PortfolioService {
    /// Creates an empty portfolio backed by in-memory adapters.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(InMemoryRoster::new(), InMemoryProjectCatalogue::new())
    }
}

impl<R, C> PortfolioService<R, C>
where
    R: Roster,
    C: ProjectCatalogue,
{
    /// Creates a portfolio over the given adapters with fresh sequences and
    /// the standard billing policy.
    #[must_use]
    pub const fn new(roster: R, catalogue: C) -> Self {
        Self {
            roster,
            catalogue,
            employee_ids: IdSequence::new(),
            project_ids: IdSequence::new(),
            billing_policy: BillingPolicy::standard(),
        }
    }

    /// Prices projects registered from now on under `policy`.
    #[must_use]
    pub const fn with_billing_policy(mut self, policy: BillingPolicy) -> Self {
        self.billing_policy = policy;
        self
    }

    /// Replaces the employee and project id sequences.
    #[must_use]
    pub const fn with_sequences(
        mut self,
        employee_ids: IdSequence,
        project_ids: IdSequence,
    ) -> Self {
        self.employee_ids = employee_ids;
        self.project_ids = project_ids;
        self
    }

    /// Rewinds both id sequences to 1.
    pub const fn reset_sequences(&mut self) {
        self.employee_ids.reset();
        self.project_ids.reset();
    }

    /// Returns the roster.
    #[must_use]
    pub const fn roster(&self) -> &R {
        &self.roster
    }

    /// Returns the project catalogue.
    #[must_use]
    pub const fn catalogue(&self) -> &C {
        &self.catalogue
    }

    /// Returns the policy applied to newly registered projects.
    #[must_use]
    pub const fn billing_policy(&self) -> &BillingPolicy {
        &self.billing_policy
    }

    /// Registers an hourly contractor.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Employee`] for an empty name or invalid rate.
    #[instrument(skip(self))]
    pub fn register_contractor(
        &mut self,
        name: &str,
        hourly_rate: f64,
    ) -> Result<EmployeeId, PortfolioError> {
        let employee = Employee::contractor(name, hourly_rate, &mut self.employee_ids)?;
        self.enrol(employee)
    }

    /// Registers a staff employee in `category`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Employee`] for an empty name, invalid rate
    /// or unknown category.
    #[instrument(skip(self))]
    pub fn register_staff(
        &mut self,
        name: &str,
        daily_rate: f64,
        category: &str,
    ) -> Result<EmployeeId, PortfolioError> {
        let employee = Employee::staff(name, daily_rate, category, &mut self.employee_ids)?;
        self.enrol(employee)
    }

    /// Registers a project with its initial tasks.
    ///
    /// Initial tasks do not shift the dates one by one. Once booked, the end
    /// dates are extended to cover the whole days of all of them when the
    /// requested estimate falls short.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::NoInitialTasks`],
    /// [`PortfolioError::InvalidDate`] or the wrapped validation error. No
    /// project number is consumed on failure.
    #[instrument(skip_all, fields(client = request.client_name()))]
    pub fn register_project(
        &mut self,
        request: RegisterProjectRequest,
    ) -> Result<ProjectId, PortfolioError> {
        if request.tasks.is_empty() {
            return Err(PortfolioError::NoInitialTasks);
        }
        let start_date = parse_date(&request.start_date)?;
        let estimated_end_date = parse_date(&request.estimated_end_date)?;
        let mut client = Client::new(request.client_name)?;
        if let Some(email) = request.client_email {
            client = client.with_email(email);
        }
        if let Some(phone) = request.client_phone {
            client = client.with_phone(phone);
        }
        for entry in &request.tasks {
            Task::new(entry.title.as_str(), entry.description.as_str(), entry.days)?;
        }

        let mut project = Project::new(
            client,
            request.address,
            start_date,
            estimated_end_date,
            &mut self.project_ids,
        )?
        .with_billing_policy(self.billing_policy);
        for entry in request.tasks {
            project.add_initial_task(entry.title, entry.description, entry.days)?;
        }
        project.cover_planned_work()?;

        let id = project.id();
        let end = project.estimated_end_date();
        self.catalogue.store(project)?;
        info!(project = %id, estimated_end_date = %end, "project registered");
        Ok(id)
    }

    /// Adds a task to an open project, pushing its end dates back.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`] or the wrapped domain
    /// error.
    #[instrument(skip(self, description))]
    pub fn add_task(
        &mut self,
        project: ProjectId,
        title: &str,
        description: &str,
        days: f64,
    ) -> Result<(), PortfolioError> {
        self.project_mut(project)?.add_task(title, description, days)?;
        Ok(())
    }

    /// Staffs a task with the available employee holding the lowest number.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`],
    /// [`PortfolioError::NoAvailableEmployee`] or the wrapped domain error.
    #[instrument(skip(self))]
    pub fn assign_first_available(
        &mut self,
        project: ProjectId,
        title: &str,
    ) -> Result<EmployeeId, PortfolioError> {
        self.open_project(project)?;
        let employee = self
            .roster
            .first_available()
            .map(Employee::id)
            .ok_or(PortfolioError::NoAvailableEmployee)?;
        self.assign(project, title, employee)
    }

    /// Staffs a task with the available employee holding the fewest delays.
    ///
    /// # Errors
    ///
    /// Same as [`PortfolioService::assign_first_available`].
    #[instrument(skip(self))]
    pub fn assign_least_delayed(
        &mut self,
        project: ProjectId,
        title: &str,
    ) -> Result<EmployeeId, PortfolioError> {
        self.open_project(project)?;
        let employee = self
            .roster
            .least_delayed_available()
            .map(Employee::id)
            .ok_or(PortfolioError::NoAvailableEmployee)?;
        self.assign(project, title, employee)
    }

    /// Hands a staffed task over to `employee`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`],
    /// [`PortfolioError::EmployeeNotFound`],
    /// [`PortfolioError::EmployeeUnavailable`] or the wrapped domain error.
    #[instrument(skip(self))]
    pub fn reassign_employee(
        &mut self,
        project: ProjectId,
        employee: EmployeeId,
        title: &str,
    ) -> Result<(), PortfolioError> {
        self.open_project(project)?;
        if !self.employee(employee)?.is_available() {
            return Err(PortfolioError::EmployeeUnavailable(employee));
        }
        self.reassign(project, title, employee)
    }

    /// Hands a staffed task over to the least-delayed available employee.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`],
    /// [`PortfolioError::NoAvailableEmployee`] or the wrapped domain error.
    #[instrument(skip(self))]
    pub fn reassign_least_delayed(
        &mut self,
        project: ProjectId,
        title: &str,
    ) -> Result<EmployeeId, PortfolioError> {
        self.open_project(project)?;
        let employee = self
            .roster
            .least_delayed_available()
            .map(Employee::id)
            .ok_or(PortfolioError::NoAvailableEmployee)?;
        self.reassign(project, title, employee)?;
        Ok(employee)
    }

    /// Records `days` of delay on a task.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`] or the wrapped domain
    /// error.
    #[instrument(skip(self))]
    pub fn record_delay(
        &mut self,
        project: ProjectId,
        title: &str,
        days: f64,
    ) -> Result<(), PortfolioError> {
        let record = self
            .catalogue
            .get_mut(project)
            .ok_or(PortfolioError::ProjectNotFound(project))?;
        record.record_delay(title, days, &mut self.roster)?;
        Ok(())
    }

    /// Marks a task as finished and releases its responsible.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`] or the wrapped domain
    /// error.
    #[instrument(skip(self))]
    pub fn finish_task(&mut self, project: ProjectId, title: &str) -> Result<(), PortfolioError> {
        let record = self
            .catalogue
            .get_mut(project)
            .ok_or(PortfolioError::ProjectNotFound(project))?;
        record.finish_task(title, &mut self.roster)?;
        Ok(())
    }

    /// Closes a project once every open task has a responsible.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`],
    /// [`PortfolioError::UnassignedTasksRemain`] or the wrapped domain error.
    #[instrument(skip(self))]
    pub fn finish_project(
        &mut self,
        project: ProjectId,
        actual_end_date: NaiveDate,
    ) -> Result<(), PortfolioError> {
        let record = self
            .catalogue
            .get_mut(project)
            .ok_or(PortfolioError::ProjectNotFound(project))?;
        if record.has_unassigned_tasks() {
            return Err(PortfolioError::UnassignedTasksRemain(project));
        }
        record.finish(actual_end_date, &mut self.roster)?;
        info!(project = %project, %actual_end_date, "project finished");
        Ok(())
    }

    /// Finds a project by number.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`].
    pub fn project(&self, id: ProjectId) -> Result<&Project, PortfolioError> {
        self.catalogue
            .get(id)
            .ok_or(PortfolioError::ProjectNotFound(id))
    }

    /// Finds an employee by file number.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EmployeeNotFound`].
    pub fn employee(&self, id: EmployeeId) -> Result<&Employee, PortfolioError> {
        self.roster.get(id).ok_or(PortfolioError::EmployeeNotFound(id))
    }

    /// Returns the billed total of a project.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`] or the wrapped domain
    /// error.
    pub fn project_cost(&self, project: ProjectId) -> Result<f64, PortfolioError> {
        Ok(self.project(project)?.total_cost(&self.roster)?)
    }

    /// Returns whether a project was finished.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`].
    pub fn is_finished(&self, project: ProjectId) -> Result<bool, PortfolioError> {
        Ok(self.project(project)?.is_finished())
    }

    /// Lists finished projects as `(number, address)` pairs.
    #[must_use]
    pub fn finished_projects(&self) -> Vec<(ProjectId, &str)> {
        self.projects_in(ProjectStatus::Finished)
    }

    /// Lists pending projects as `(number, address)` pairs.
    #[must_use]
    pub fn pending_projects(&self) -> Vec<(ProjectId, &str)> {
        self.projects_in(ProjectStatus::Pending)
    }

    /// Lists active projects as `(number, address)` pairs.
    #[must_use]
    pub fn active_projects(&self) -> Vec<(ProjectId, &str)> {
        self.projects_in(ProjectStatus::Active)
    }

    /// Lists the file numbers of available employees.
    #[must_use]
    pub fn available_employees(&self) -> Vec<EmployeeId> {
        self.roster
            .list()
            .into_iter()
            .filter(|employee| employee.is_available())
            .map(Employee::id)
            .collect()
    }

    /// Lists every employee as `(file number, name)` pairs.
    #[must_use]
    pub fn employees(&self) -> Vec<(EmployeeId, &str)> {
        self.roster
            .list()
            .into_iter()
            .map(|employee| (employee.id(), employee.name().as_str()))
            .collect()
    }

    /// Returns how many tasks ran late under `employee`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EmployeeNotFound`].
    pub fn delay_count(&self, employee: EmployeeId) -> Result<u32, PortfolioError> {
        Ok(self.employee(employee)?.delay_count())
    }

    /// Returns whether `employee` ever had a late task.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EmployeeNotFound`].
    pub fn has_delays(&self, employee: EmployeeId) -> Result<bool, PortfolioError> {
        Ok(self.delay_count(employee)? > 0)
    }

    /// Lists every employee that ever worked on a project as
    /// `(file number, name)` pairs, in order of first assignment.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`] or
    /// [`PortfolioError::EmployeeNotFound`].
    pub fn employees_on_project(
        &self,
        project: ProjectId,
    ) -> Result<Vec<(EmployeeId, &str)>, PortfolioError> {
        self.project(project)?
            .employee_history()
            .iter()
            .map(|id| {
                self.employee(*id)
                    .map(|employee| (employee.id(), employee.name().as_str()))
            })
            .collect()
    }

    /// Lists the titles of open tasks without a responsible.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`] or
    /// [`ProjectDomainError::ProjectFinished`] wrapped in
    /// [`PortfolioError::Project`].
    pub fn unassigned_task_titles(&self, project: ProjectId) -> Result<Vec<&str>, PortfolioError> {
        Ok(self
            .open_project(project)?
            .unassigned_tasks()
            .into_iter()
            .map(Task::title)
            .collect())
    }

    /// Lists every task title of a project.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`].
    pub fn task_titles(&self, project: ProjectId) -> Result<Vec<&str>, PortfolioError> {
        Ok(self.project(project)?.task_titles())
    }

    /// Returns the site address of a project.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`].
    pub fn project_address(&self, project: ProjectId) -> Result<&str, PortfolioError> {
        Ok(self.project(project)?.address())
    }

    /// Renders the plain-text summary of a project.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ProjectNotFound`] or
    /// [`PortfolioError::Summary`].
    pub fn project_summary(&self, project: ProjectId) -> Result<String, PortfolioError> {
        Ok(render_summary(self.project(project)?, &self.roster)?)
    }

    fn enrol(&mut self, employee: Employee) -> Result<EmployeeId, PortfolioError> {
        let id = employee.id();
        let kind = employee.kind().as_str();
        self.roster.enrol(employee)?;
        info!(employee = %id, kind, "employee registered");
        Ok(id)
    }

    fn open_project(&self, id: ProjectId) -> Result<&Project, PortfolioError> {
        let project = self.project(id)?;
        if project.is_finished() {
            return Err(ProjectDomainError::ProjectFinished(id).into());
        }
        Ok(project)
    }

    fn project_mut(&mut self, id: ProjectId) -> Result<&mut Project, PortfolioError> {
        self.catalogue
            .get_mut(id)
            .ok_or(PortfolioError::ProjectNotFound(id))
    }

    fn projects_in(&self, status: ProjectStatus) -> Vec<(ProjectId, &str)> {
        self.catalogue
            .list_by_status(status)
            .into_iter()
            .map(|project| (project.id(), project.address()))
            .collect()
    }

    fn assign(
        &mut self,
        project: ProjectId,
        title: &str,
        employee: EmployeeId,
    ) -> Result<EmployeeId, PortfolioError> {
        let record = self
            .catalogue
            .get_mut(project)
            .ok_or(PortfolioError::ProjectNotFound(project))?;
        record.assign_employee(title, employee, &mut self.roster)?;
        debug!(project = %project, task = title, employee = %employee, "task staffed");
        Ok(employee)
    }

    fn reassign(
        &mut self,
        project: ProjectId,
        title: &str,
        employee: EmployeeId,
    ) -> Result<(), PortfolioError> {
        let record = self
            .catalogue
            .get_mut(project)
            .ok_or(PortfolioError::ProjectNotFound(project))?;
        record.reassign_employee(title, employee, &mut self.roster)?;
        debug!(project = %project, task = title, employee = %employee, "task handed over");
        Ok(())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, PortfolioError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| PortfolioError::InvalidDate {
        value: value.to_owned(),
    })
}
