//! Domain model for projects and their tasks.
//!
//! Tasks refer to employees by [`crate::employee::domain::EmployeeId`] only.
//! Operations that change employee state take a
//! [`crate::employee::ports::Roster`] and resolve ids through it, so the
//! roster stays the single owner of employee records.

mod client;
mod error;
mod ids;
mod project;
mod status;
mod task;

pub use client::Client;
pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::ProjectId;
pub use project::Project;
pub use status::ProjectStatus;
pub use task::{MIN_TASK_DURATION_DAYS, Task};
