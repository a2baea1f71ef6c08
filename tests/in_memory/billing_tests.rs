//! In-memory integration tests for project totals and summaries.

use super::helpers::{Crew, assert_amount, bathroom_request, crew, date, kitchen_request, register};
use home_solution::billing::BillingPolicy;
use home_solution::project::services::PortfolioService;
use rstest::rstest;

#[rstest]
fn on_time_staff_job_is_billed_with_bonus_and_on_time_markup(mut crew: Crew) {
    let id = register(&mut crew.portfolio, bathroom_request());
    crew.portfolio
        .assign_first_available(id, "Tiling")
        .expect("assignment should succeed");
    crew.portfolio
        .finish_task(id, "Tiling")
        .expect("task should finish");

    assert_amount(crew.portfolio.project_cost(id).expect("cost"), 275.4);
}

#[rstest]
fn delayed_staff_job_is_billed_without_bonus_and_with_delayed_markup(mut crew: Crew) {
    let id = register(&mut crew.portfolio, bathroom_request());
    crew.portfolio
        .assign_first_available(id, "Tiling")
        .expect("assignment should succeed");
    crew.portfolio
        .record_delay(id, "Tiling", 1.0)
        .expect("delay should record");
    crew.portfolio
        .finish_task(id, "Tiling")
        .expect("task should finish");

    assert_eq!(crew.portfolio.delay_count(crew.technician), Ok(1));
    assert_amount(crew.portfolio.project_cost(id).expect("cost"), 375.0);
}

#[rstest]
fn mixed_crew_job_sums_every_task(mut crew: Crew) {
    let id = register(&mut crew.portfolio, kitchen_request());
    crew.portfolio
        .assign_first_available(id, "Cabinets")
        .expect("assignment should succeed");
    crew.portfolio
        .assign_first_available(id, "Painting")
        .expect("assignment should succeed");

    let cabinets = 3.0 * 100.0 * 1.02;
    let painting = 1.5 * 8.0 * 10.0;
    assert_amount(
        crew.portfolio.project_cost(id).expect("cost"),
        (cabinets + painting) * 1.35,
    );
}

#[rstest]
fn late_finish_switches_to_delayed_markup(mut crew: Crew) {
    let id = register(&mut crew.portfolio, bathroom_request());
    crew.portfolio
        .assign_first_available(id, "Tiling")
        .expect("assignment should succeed");

    crew.portfolio
        .finish_project(id, date(2024, 1, 10))
        .expect("project should finish");

    assert_amount(crew.portfolio.project_cost(id).expect("cost"), 204.0 * 1.25);
}

#[rstest]
fn summary_lists_every_task(mut crew: Crew) {
    let id = register(&mut crew.portfolio, kitchen_request());
    crew.portfolio
        .assign_first_available(id, "Cabinets")
        .expect("assignment should succeed");
    crew.portfolio
        .finish_task(id, "Cabinets")
        .expect("task should finish");
    crew.portfolio
        .assign_first_available(id, "Painting")
        .expect("assignment should succeed");

    let summary = crew.portfolio.project_summary(id).expect("summary");

    assert_eq!(
        summary,
        "\
Project #1
Client: Luis Pardo
Phone: 555-0101
Address: 8 Mill Lane
Status: ACTIVE
Start date: 2024-05-06
Estimated end date: 2024-05-31
Actual end date: 2024-05-31
Tasks:
  - Cabinets - Bruno Vidal (historical) - Finished
  - Painting - Bruno Vidal - Pending
Total cost: $688.50"
    );
}

#[rstest]
fn policy_from_json_prices_new_projects() {
    let policy: BillingPolicy =
        serde_json::from_str(r#"{ "on_time_markup": 1.5 }"#).expect("policy should parse");
    let mut portfolio = PortfolioService::in_memory().with_billing_policy(policy);
    portfolio
        .register_contractor("Carla Soto", 10.0)
        .expect("contractor should register");
    let id = register(&mut portfolio, bathroom_request());
    portfolio
        .assign_first_available(id, "Tiling")
        .expect("assignment should succeed");

    assert_amount(portfolio.project_cost(id).expect("cost"), 160.0 * 1.5);
}
