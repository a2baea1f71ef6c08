//! When steps for project lifecycle BDD scenarios.

use super::world::{ProjectWorld, parse_date};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the first available employee is assigned to "{title}""#)]
fn assign_first_available(world: &mut ProjectWorld, title: String) -> Result<(), eyre::Report> {
    let project = world.project()?;
    world
        .portfolio
        .assign_first_available(project, &title)
        .wrap_err("assign first available employee")?;
    Ok(())
}

#[when(r#"another assignment to "{title}" is attempted"#)]
fn attempt_assignment(world: &mut ProjectWorld, title: String) -> Result<(), eyre::Report> {
    let project = world.project()?;
    world.last_error = world
        .portfolio
        .assign_first_available(project, &title)
        .err();
    Ok(())
}

#[when(r#"the task "{title}" is delayed by {days} days"#)]
fn delay_task(world: &mut ProjectWorld, title: String, days: f64) -> Result<(), eyre::Report> {
    let project = world.project()?;
    world
        .portfolio
        .record_delay(project, &title, days)
        .wrap_err("record delay")?;
    Ok(())
}

#[when(r#"the task "{title}" is finished"#)]
fn finish_task(world: &mut ProjectWorld, title: String) -> Result<(), eyre::Report> {
    let project = world.project()?;
    world
        .portfolio
        .finish_task(project, &title)
        .wrap_err("finish task")?;
    Ok(())
}

#[when(r#"the project is finished on "{end}""#)]
fn finish_project(world: &mut ProjectWorld, end: String) -> Result<(), eyre::Report> {
    let project = world.project()?;
    let actual_end = parse_date(&end)?;
    world
        .portfolio
        .finish_project(project, actual_end)
        .wrap_err("finish project")?;
    Ok(())
}

#[when(r#"adding a task "{title}" of {days} days is attempted"#)]
fn attempt_add_task(
    world: &mut ProjectWorld,
    title: String,
    days: f64,
) -> Result<(), eyre::Report> {
    let project = world.project()?;
    world.last_error = world.portfolio.add_task(project, &title, "", days).err();
    Ok(())
}
