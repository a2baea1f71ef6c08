//! Home Solution: staffing and billing for home-renovation projects.
//!
//! The crate tracks employees, the projects they work on and the tasks inside
//! each project, and prices finished work from who did it and whether it ran
//! late.
//!
//! # Architecture
//!
//! Home Solution follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in memory)
//! - **Services**: Workflows spanning employees and projects
//!
//! # Modules
//!
//! - [`employee`]: Contractors and staff, their rates and the roster
//! - [`project`]: Projects, tasks, status tracking, billing and summaries
//! - [`billing`]: Pricing constants
//! - [`sequence`]: Sequential identifier issuing
//! - [`error`]: Error classification shared by every module
//!
//! # Example
//!
//! ```
//! use home_solution::project::services::{PortfolioService, RegisterProjectRequest};
//!
//! # fn main() -> Result<(), home_solution::project::services::PortfolioError> {
//! let mut portfolio = PortfolioService::in_memory();
//! portfolio.register_staff("Bruno", 100.0, "TECHNICIAN")?;
//! let project = portfolio.register_project(
//!     RegisterProjectRequest::new("Marta Ruiz", "12 Harbour Road", "2024-01-01", "2024-01-01")
//!         .with_task("Tiling", "Bathroom floor", 2.0),
//! )?;
//! portfolio.assign_first_available(project, "Tiling")?;
//! portfolio.finish_task(project, "Tiling")?;
//! assert_eq!(format!("{:.2}", portfolio.project_cost(project)?), "275.40");
//! # Ok(())
//! # }
//! ```

pub mod billing;
pub mod employee;
pub mod error;
pub mod project;
pub mod sequence;
