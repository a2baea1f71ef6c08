//! In-memory integration tests for assignment, reassignment and delays.

use super::helpers::{Crew, bathroom_request, crew, date, kitchen_request, register};
use home_solution::error::ErrorKind;
use home_solution::project::domain::{ProjectDomainError, ProjectStatus};
use home_solution::project::services::PortfolioError;
use rstest::rstest;

#[rstest]
fn staffing_every_task_activates_the_project(mut crew: Crew) {
    let id = register(&mut crew.portfolio, kitchen_request());

    let first = crew
        .portfolio
        .assign_first_available(id, "Cabinets")
        .expect("first assignment should succeed");
    assert_eq!(
        crew.portfolio.project(id).expect("project").status(),
        ProjectStatus::Pending
    );
    let second = crew
        .portfolio
        .assign_first_available(id, "Painting")
        .expect("second assignment should succeed");

    assert_eq!(first, crew.technician);
    assert_eq!(second, crew.contractor);
    assert_eq!(
        crew.portfolio.project(id).expect("project").status(),
        ProjectStatus::Active
    );
    assert_eq!(crew.portfolio.available_employees(), vec![crew.expert]);
}

#[rstest]
fn assigning_a_staffed_task_is_a_state_conflict(mut crew: Crew) {
    let id = register(&mut crew.portfolio, bathroom_request());
    crew.portfolio
        .assign_first_available(id, "Tiling")
        .expect("assignment should succeed");
    let before = crew.portfolio.project(id).expect("project").clone();

    let error = crew
        .portfolio
        .assign_first_available(id, "Tiling")
        .expect_err("second assignment should fail");

    assert_eq!(
        error,
        PortfolioError::Project(ProjectDomainError::TaskAlreadyAssigned("Tiling".to_owned()))
    );
    assert_eq!(error.kind(), ErrorKind::StateConflict);
    assert_eq!(crew.portfolio.project(id).expect("project"), &before);
    assert!(
        crew.portfolio
            .employee(crew.contractor)
            .expect("contractor")
            .is_available()
    );
}

#[rstest]
fn delays_are_charged_once_per_task(mut crew: Crew) {
    let id = register(&mut crew.portfolio, bathroom_request());
    crew.portfolio
        .assign_first_available(id, "Tiling")
        .expect("assignment should succeed");

    crew.portfolio
        .record_delay(id, "Tiling", 1.0)
        .expect("delay should record");
    crew.portfolio
        .record_delay(id, "Tiling", 0.5)
        .expect("delay should record");

    assert_eq!(crew.portfolio.delay_count(crew.technician), Ok(1));
    let project = crew.portfolio.project(id).expect("project");
    assert_eq!(project.estimated_end_date(), date(2024, 1, 3));
    let task = project.task("Tiling").expect("task");
    assert!((task.delay() - 0.5).abs() < f64::EPSILON);
}

#[rstest]
fn least_delayed_reassignment_skips_late_employees(mut crew: Crew) {
    let first = register(&mut crew.portfolio, bathroom_request());
    crew.portfolio
        .assign_first_available(first, "Tiling")
        .expect("assignment should succeed");
    crew.portfolio
        .record_delay(first, "Tiling", 2.0)
        .expect("delay should record");
    crew.portfolio
        .finish_task(first, "Tiling")
        .expect("task should finish");

    let second = register(&mut crew.portfolio, kitchen_request());
    crew.portfolio
        .assign_least_delayed(second, "Cabinets")
        .expect("assignment should succeed");
    let chosen = crew
        .portfolio
        .reassign_least_delayed(second, "Cabinets")
        .expect("reassignment should succeed");

    assert_eq!(chosen, crew.expert);
    assert_eq!(
        crew.portfolio
            .employees_on_project(second)
            .expect("history"),
        vec![(crew.contractor, "Carla Soto"), (crew.expert, "Dora Quiroga")]
    );
    assert!(
        crew.portfolio
            .employee(crew.contractor)
            .expect("contractor")
            .is_available()
    );
}

#[rstest]
fn explicit_reassignment_moves_the_task(mut crew: Crew) {
    let id = register(&mut crew.portfolio, bathroom_request());
    crew.portfolio
        .assign_first_available(id, "Tiling")
        .expect("assignment should succeed");

    crew.portfolio
        .reassign_employee(id, crew.expert, "Tiling")
        .expect("reassignment should succeed");

    let task = crew
        .portfolio
        .project(id)
        .expect("project")
        .task("Tiling")
        .expect("task")
        .clone();
    assert_eq!(task.current_responsible(), Some(crew.expert));
    assert_eq!(
        crew.portfolio.available_employees(),
        vec![crew.technician, crew.contractor]
    );
}
