//! Application services for the project subsystem.
//!
//! Services orchestrate domain operations across the roster and the project
//! catalogue.

mod portfolio;
mod summary;

pub use portfolio::{PortfolioError, PortfolioService, RegisterProjectRequest, TaskSpec};
pub use summary::{SummaryError, render_summary};
