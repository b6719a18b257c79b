//! When steps for board flow BDD scenarios.

use rstest_bdd_macros::when;
use taskboard::board::domain::TaskStatus;

use super::world::{BoardFlowWorld, run_async};

#[when(r#"the user submits a task titled "{title}" described as "{description}""#)]
fn submit_task(world: &mut BoardFlowWorld, title: String, description: String) {
    run_async(world.board.submit(&title, &description));
}

#[when("the user submits a task with a blank title")]
fn submit_blank_title(world: &mut BoardFlowWorld) {
    run_async(world.board.submit("", "a description"));
}

#[when(r#"the user drags "{title}" onto the "{column}" column"#)]
fn drag_task_onto_column(
    world: &mut BoardFlowWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let dragged = world
        .board
        .tasks()
        .iter()
        .find(|task| task.title() == title)
        .cloned()
        .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))?;

    world.board.drag_start(dragged);
    world.board.drag_over(status);
    run_async(world.board.drop_on(status));
    Ok(())
}

#[when("the user signs out")]
fn sign_out(world: &mut BoardFlowWorld) -> Result<(), eyre::Report> {
    world.gateway.sign_out();
    let transition = run_async(world.board.await_auth_transition());
    if transition.is_none() {
        return Err(eyre::eyre!(
            "auth gateway shut down before delivering the transition"
        ));
    }
    Ok(())
}
