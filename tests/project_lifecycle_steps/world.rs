//! Shared world state for project lifecycle BDD scenarios.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use home_solution::{
    employee::domain::EmployeeId,
    project::{
        domain::ProjectId,
        services::{PortfolioError, PortfolioService},
    },
};
use rstest::fixture;

/// Scenario world for project lifecycle behaviour tests.
pub struct ProjectWorld {
    pub portfolio: PortfolioService,
    pub employees: BTreeMap<String, EmployeeId>,
    pub project: Option<ProjectId>,
    pub last_error: Option<PortfolioError>,
}

impl ProjectWorld {
    /// Creates a world with an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self {
            portfolio: PortfolioService::in_memory(),
            employees: BTreeMap::new(),
            project: None,
            last_error: None,
        }
    }

    /// Returns the project registered by the scenario.
    pub fn project(&self) -> Result<ProjectId, eyre::Report> {
        self.project
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the file number of the employee registered as `name`.
    pub fn employee(&self, name: &str) -> Result<EmployeeId, eyre::Report> {
        self.employees
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("no employee named {name} in scenario world"))
    }
}

impl Default for ProjectWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectWorld {
    ProjectWorld::default()
}

/// Parses a `yyyy-mm-dd` date from a step argument.
pub fn parse_date(value: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid date {value} in scenario: {err}"))
}
