//! Given steps for board flow BDD scenarios.

use rstest_bdd_macros::given;

use super::world::{BoardFlowWorld, run_async};

#[given("a signed-in user")]
fn signed_in_user(world: &mut BoardFlowWorld) {
    world.gateway.sign_in(BoardFlowWorld::default_user());
    run_async(world.board.start());
}

#[given(r#"the board shows a task titled "{title}" described as "{description}""#)]
fn board_shows_task(
    world: &mut BoardFlowWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    run_async(world.board.submit(&title, &description));
    if world.board.notice().is_some() {
        return Err(eyre::eyre!("task submission unexpectedly raised a notice"));
    }
    Ok(())
}
