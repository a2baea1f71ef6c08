//! Shared test helpers for in-memory portfolio integration tests.

use chrono::NaiveDate;
use home_solution::employee::domain::EmployeeId;
use home_solution::project::domain::ProjectId;
use home_solution::project::services::{PortfolioService, RegisterProjectRequest};
use rstest::fixture;

/// Portfolio with one technician, one contractor and one expert enrolled.
pub struct Crew {
    pub portfolio: PortfolioService,
    pub technician: EmployeeId,
    pub contractor: EmployeeId,
    pub expert: EmployeeId,
}

/// Provides a fresh in-memory portfolio for each test.
#[fixture]
pub fn portfolio() -> PortfolioService {
    PortfolioService::in_memory()
}

/// Provides a portfolio with three employees enrolled in file-number order.
#[fixture]
pub fn crew(mut portfolio: PortfolioService) -> Crew {
    let technician = portfolio
        .register_staff("Bruno Vidal", 100.0, "TECHNICIAN")
        .expect("technician should register");
    let contractor = portfolio
        .register_contractor("Carla Soto", 10.0)
        .expect("contractor should register");
    let expert = portfolio
        .register_staff("Dora Quiroga", 200.0, "EXPERT")
        .expect("expert should register");
    Crew {
        portfolio,
        technician,
        contractor,
        expert,
    }
}

/// Two-day bathroom job starting and ending on 2024-01-01.
pub fn bathroom_request() -> RegisterProjectRequest {
    RegisterProjectRequest::new("Marta Ruiz", "12 Harbour Road", "2024-01-01", "2024-01-01")
        .with_email("marta@example.com")
        .with_task("Tiling", "Bathroom floor", 2.0)
}

/// Kitchen job with two tasks and room to spare in the schedule.
pub fn kitchen_request() -> RegisterProjectRequest {
    RegisterProjectRequest::new("Luis Pardo", "8 Mill Lane", "2024-05-06", "2024-05-31")
        .with_phone("555-0101")
        .with_task("Cabinets", "Fit wall units", 3.0)
        .with_task("Painting", "Two coats", 1.5)
}

/// Registers `request` and returns its number.
pub fn register(portfolio: &mut PortfolioService, request: RegisterProjectRequest) -> ProjectId {
    portfolio
        .register_project(request)
        .expect("project should register")
}

/// Builds a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Compares two amounts with a tolerance for rounding.
pub fn assert_amount(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
