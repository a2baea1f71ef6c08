//! Given steps for project lifecycle BDD scenarios.

use super::world::ProjectWorld;
use home_solution::project::services::RegisterProjectRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a staff employee "{name}" earning {rate} per day as "{category}""#)]
fn staff_employee(
    world: &mut ProjectWorld,
    name: String,
    rate: f64,
    category: String,
) -> Result<(), eyre::Report> {
    let id = world
        .portfolio
        .register_staff(&name, rate, &category)
        .wrap_err("register staff employee")?;
    world.employees.insert(name, id);
    Ok(())
}

#[given(r#"a contractor "{name}" earning {rate} per hour"#)]
fn contractor(world: &mut ProjectWorld, name: String, rate: f64) -> Result<(), eyre::Report> {
    let id = world
        .portfolio
        .register_contractor(&name, rate)
        .wrap_err("register contractor")?;
    world.employees.insert(name, id);
    Ok(())
}

#[given(
    r#"a project starting "{start}" and ending "{end}" with a task "{title}" of {days} days"#
)]
fn project_with_task(
    world: &mut ProjectWorld,
    start: String,
    end: String,
    title: String,
    days: f64,
) -> Result<(), eyre::Report> {
    let request = RegisterProjectRequest::new("Marta Ruiz", "12 Harbour Road", start, end)
        .with_task(title, "", days);
    let id = world
        .portfolio
        .register_project(request)
        .wrap_err("register project")?;
    world.project = Some(id);
    Ok(())
}
