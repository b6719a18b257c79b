//! Then steps for board flow BDD scenarios.

use rstest_bdd_macros::then;
use taskboard::board::domain::TaskStatus;

use super::world::BoardFlowWorld;

#[then(r#"the task "{title}" appears in the "{column}" column"#)]
fn task_appears_in_column(
    world: &BoardFlowWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let columns = world.board.partition();
    if !columns
        .column(status)
        .iter()
        .any(|task| task.title() == title)
    {
        return Err(eyre::eyre!(
            "task {title:?} not found in the {column} column"
        ));
    }
    Ok(())
}

#[then(r#"the "{column}" column is empty"#)]
fn column_is_empty(world: &BoardFlowWorld, column: String) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let columns = world.board.partition();
    if !columns.column(status).is_empty() {
        return Err(eyre::eyre!("expected the {column} column to be empty"));
    }
    Ok(())
}

#[then("a notice is shown")]
fn notice_is_shown(world: &BoardFlowWorld) -> Result<(), eyre::Report> {
    if world.board.notice().is_none() {
        return Err(eyre::eyre!("expected a visible notice"));
    }
    Ok(())
}

#[then("no notice is shown")]
fn no_notice_is_shown(world: &BoardFlowWorld) -> Result<(), eyre::Report> {
    if let Some(notice) = world.board.notice() {
        return Err(eyre::eyre!("unexpected notice: {}", notice.message()));
    }
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &BoardFlowWorld) -> Result<(), eyre::Report> {
    if !world.board.tasks().is_empty() {
        return Err(eyre::eyre!(
            "expected an empty board, found {} tasks",
            world.board.tasks().len()
        ));
    }
    Ok(())
}
