//! When steps for board synchronisation BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use mdboard::board::domain::{BoardMutation, ColumnSnapshot, Task};
use rstest_bdd_macros::when;

fn record_load(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board = run_async(world.store.load()).wrap_err("load board")?;
    world.loaded.push(board);
    Ok(())
}

#[when("the board is loaded")]
fn load_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    record_load(world)
}

#[when("the board is loaded twice")]
fn load_board_twice(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    record_load(world)?;
    record_load(world)
}

#[when(r#"the task "{text}" is moved from "{from}" to "{to}""#)]
fn move_task(
    world: &mut BoardWorld,
    text: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let board = run_async(world.store.load()).wrap_err("load board before moving")?;
    let task_id = board
        .tasks(&from)
        .and_then(|tasks| tasks.iter().find(|task| task.text() == text))
        .map(|task| task.id().clone())
        .ok_or_else(|| eyre::eyre!("task {text:?} not found in column {from:?}"))?;

    let updated = run_async(world.store.apply(BoardMutation::Move { task_id, from, to }))
        .wrap_err("apply move")?;
    world.loaded.push(updated);
    Ok(())
}

#[when(r#"the client saves a board with "{text}" under "{column}""#)]
fn client_saves_board(
    world: &mut BoardWorld,
    text: String,
    column: String,
) -> Result<(), eyre::Report> {
    let mut snapshot = ColumnSnapshot::new();
    snapshot.insert(column, vec![Task::with_fresh_id(text, false)]);
    let saved = run_async(world.store.replace(snapshot)).wrap_err("save client board")?;
    world.loaded.push(saved);
    Ok(())
}
