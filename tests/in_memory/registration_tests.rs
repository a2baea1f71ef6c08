//! In-memory integration tests for employee and project registration.

use super::helpers::{bathroom_request, date, kitchen_request, portfolio, register};
use home_solution::employee::domain::{EmployeeDomainError, EmployeeId, EmployeeKind, StaffCategory};
use home_solution::error::ErrorKind;
use home_solution::project::domain::{ProjectDomainError, ProjectId, ProjectStatus};
use home_solution::project::services::{PortfolioError, PortfolioService, RegisterProjectRequest};
use rstest::rstest;

#[rstest]
fn employees_are_numbered_in_registration_order(mut portfolio: PortfolioService) {
    let first = portfolio
        .register_contractor("Ana Gil", 12.5)
        .expect("contractor should register");
    let second = portfolio
        .register_staff("Bruno Vidal", 100.0, "initial")
        .expect("staff should register");

    assert_eq!(first, EmployeeId::new(1));
    assert_eq!(second, EmployeeId::new(2));

    let staff = portfolio.employee(second).expect("staff should be enrolled");
    assert_eq!(staff.category(), Some(StaffCategory::Initial));
    assert!(matches!(staff.kind(), EmployeeKind::Staff { .. }));
    assert!(staff.is_available());
}

#[rstest]
#[case("", 10.0, EmployeeDomainError::EmptyName)]
#[case("Ana Gil", -1.0, EmployeeDomainError::InvalidRate(-1.0))]
fn invalid_contractors_are_rejected(
    mut portfolio: PortfolioService,
    #[case] name: &str,
    #[case] rate: f64,
    #[case] expected: EmployeeDomainError,
) {
    let error = portfolio
        .register_contractor(name, rate)
        .expect_err("registration should fail");

    assert_eq!(error, PortfolioError::Employee(expected));
    assert_eq!(error.kind(), ErrorKind::Validation);

    let next = portfolio
        .register_contractor("Ana Gil", 10.0)
        .expect("valid contractor should register");
    assert_eq!(next, EmployeeId::new(1));
}

#[rstest]
fn short_estimate_is_extended_to_cover_initial_work(mut portfolio: PortfolioService) {
    let id = register(&mut portfolio, bathroom_request());

    let project = portfolio.project(id).expect("project should exist");
    assert_eq!(id, ProjectId::new(1));
    assert_eq!(project.start_date(), date(2024, 1, 1));
    assert_eq!(project.estimated_end_date(), date(2024, 1, 3));
    assert_eq!(project.actual_end_date(), date(2024, 1, 3));
    assert_eq!(project.status(), ProjectStatus::Pending);
}

#[rstest]
fn generous_estimate_is_kept(mut portfolio: PortfolioService) {
    let id = register(&mut portfolio, kitchen_request());

    let project = portfolio.project(id).expect("project should exist");
    assert_eq!(project.estimated_end_date(), date(2024, 5, 31));
    assert_eq!(
        portfolio.task_titles(id).expect("titles should list"),
        vec!["Cabinets", "Painting"]
    );
}

#[rstest]
fn registration_without_tasks_is_rejected(mut portfolio: PortfolioService) {
    let request =
        RegisterProjectRequest::new("Marta Ruiz", "12 Harbour Road", "2024-01-01", "2024-01-09");

    let error = portfolio
        .register_project(request)
        .expect_err("registration should fail");

    assert_eq!(error, PortfolioError::NoInitialTasks);
    assert_eq!(error.kind(), ErrorKind::Validation);
}

#[rstest]
fn end_before_start_is_rejected(mut portfolio: PortfolioService) {
    let request =
        RegisterProjectRequest::new("Marta Ruiz", "12 Harbour Road", "2024-02-01", "2024-01-01")
            .with_task("Tiling", "", 1.0);

    let error = portfolio
        .register_project(request)
        .expect_err("registration should fail");

    assert_eq!(
        error,
        PortfolioError::Project(ProjectDomainError::EndBeforeStart {
            start: date(2024, 2, 1),
            end: date(2024, 1, 1),
        })
    );
    assert_eq!(register(&mut portfolio, bathroom_request()), ProjectId::new(1));
}
