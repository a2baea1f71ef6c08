//! Plain-text project summary.

use minijinja::Environment;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::employee::domain::EmployeeId;
use crate::employee::ports::Roster;
use crate::error::ErrorKind;
use crate::project::domain::{Project, ProjectDomainError, Task};

const SUMMARY_TEMPLATE: &str = "\
Project #{{ id }}
Client: {{ client }}
{% if email %}Email: {{ email }}
{% endif %}{% if phone %}Phone: {{ phone }}
{% endif %}Address: {{ address }}
Status: {{ status }}
Start date: {{ start_date }}
Estimated end date: {{ estimated_end_date }}
Actual end date: {{ actual_end_date }}
Tasks:
{% for task in tasks %}  - {{ task.title }} - {{ task.responsible }} - {{ task.status }}
{% endfor %}Total cost: ${{ total_cost }}";

/// Errors raised while rendering a summary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SummaryError {
    /// The total cost could not be computed.
    #[error(transparent)]
    Cost(#[from] ProjectDomainError),

    /// The template engine rejected the summary.
    #[error("failed to render summary for project {project}: {reason}")]
    Render {
        /// Project number.
        project: u32,
        /// Engine message.
        reason: String,
    },
}

impl SummaryError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Cost(error) => error.kind(),
            Self::Render { .. } => ErrorKind::StateConflict,
        }
    }
}

/// Renders the multi-line summary of `project`.
///
/// Employee names are resolved through `roster`. A task whose responsible
/// left shows its billed employee marked `(historical)`; a task nobody
/// worked on shows `Unassigned`.
///
/// # Errors
///
/// Returns [`SummaryError::Cost`] when a billed employee is missing and
/// [`SummaryError::Render`] when the template fails.
pub fn render_summary(project: &Project, roster: &impl Roster) -> Result<String, SummaryError> {
    let total_cost = project.total_cost(roster)?;
    let context = build_summary_context(project, roster, total_cost);
    Environment::new()
        .render_str(SUMMARY_TEMPLATE, context)
        .map_err(|error| SummaryError::Render {
            project: project.id().value(),
            reason: error.to_string(),
        })
}

fn build_summary_context(
    project: &Project,
    roster: &impl Roster,
    total_cost: f64,
) -> Map<String, Value> {
    let client = project.client();
    let mut context = Map::new();
    context.insert("id".to_owned(), Value::from(project.id().value()));
    context.insert("client".to_owned(), Value::from(client.name()));
    context.insert("email".to_owned(), Value::from(client.email().unwrap_or_default()));
    context.insert("phone".to_owned(), Value::from(client.phone().unwrap_or_default()));
    context.insert("address".to_owned(), Value::from(project.address()));
    context.insert("status".to_owned(), Value::from(project.status().as_str()));
    context.insert("start_date".to_owned(), Value::from(project.start_date().to_string()));
    context.insert(
        "estimated_end_date".to_owned(),
        Value::from(project.estimated_end_date().to_string()),
    );
    context.insert(
        "actual_end_date".to_owned(),
        Value::from(project.actual_end_date().to_string()),
    );
    let tasks = project
        .tasks()
        .map(|task| task_line(task, roster))
        .collect::<Vec<_>>();
    context.insert("tasks".to_owned(), Value::Array(tasks));
    context.insert("total_cost".to_owned(), Value::from(format!("{total_cost:.2}")));
    context
}

fn task_line(task: &Task, roster: &impl Roster) -> Value {
    let responsible = match (task.current_responsible(), task.historical_responsible()) {
        (Some(current), _) => employee_label(current, roster),
        (None, Some(previous)) => format!("{} (historical)", employee_label(previous, roster)),
        (None, None) => "Unassigned".to_owned(),
    };
    let mut line = Map::new();
    line.insert("title".to_owned(), Value::from(task.title()));
    line.insert("responsible".to_owned(), Value::from(responsible));
    line.insert("status".to_owned(), Value::from(task.status_label()));
    Value::Object(line)
}

fn employee_label(id: EmployeeId, roster: &impl Roster) -> String {
    roster
        .get(id)
        .map_or_else(|| format!("#{id}"), |employee| employee.name().as_str().to_owned())
}
