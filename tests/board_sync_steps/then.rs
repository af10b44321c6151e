//! Then steps for board synchronisation BDD scenarios.

use super::world::BoardWorld;
use mdboard::board::{domain::ColumnSet, transcoder};
use rstest_bdd_macros::then;

#[then("every configured column is present and empty")]
fn every_column_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let board = world.last_board()?;
    let names: Vec<&str> = board.column_names().collect();
    if names != ["Backlog", "Active", "Done"] {
        return Err(eyre::eyre!("unexpected columns {names:?}"));
    }
    if board.task_count() != 0 {
        return Err(eyre::eyre!(
            "expected an empty board, found {} tasks",
            board.task_count()
        ));
    }
    Ok(())
}

#[then(r#"the board file lists "{first}" then "{second}" under "{column}""#)]
fn file_lists_tasks_in_order(
    world: &BoardWorld,
    first: String,
    second: String,
    column: String,
) -> Result<(), eyre::Report> {
    let board = transcoder::parse(&world.read_file()?, &ColumnSet::default());
    let texts: Vec<&str> = board
        .tasks(&column)
        .ok_or_else(|| eyre::eyre!("column {column:?} missing from board file"))?
        .iter()
        .map(|task| task.text())
        .collect();
    if texts != [first.as_str(), second.as_str()] {
        return Err(eyre::eyre!(
            "expected [{first:?}, {second:?}] under {column:?}, found {texts:?}"
        ));
    }
    Ok(())
}

#[then("the board file holds no tasks")]
fn file_holds_no_tasks(world: &BoardWorld) -> Result<(), eyre::Report> {
    let contents = world.read_file()?;
    if contents != "# Projects\n\n## Backlog\n\n## Active\n\n## Done\n" {
        return Err(eyre::eyre!("unexpected board file contents:\n{contents}"));
    }
    Ok(())
}

#[then("the task texts match but every identifier differs")]
fn reload_regenerates_ids(world: &BoardWorld) -> Result<(), eyre::Report> {
    let [first, second] = world.loaded.as_slice() else {
        return Err(eyre::eyre!(
            "expected two loaded boards, found {}",
            world.loaded.len()
        ));
    };
    let texts = |board: &mdboard::board::domain::Board| -> Vec<String> {
        board
            .columns()
            .iter()
            .flat_map(|column| column.tasks().iter().map(|task| task.text().to_owned()))
            .collect()
    };
    if texts(first) != texts(second) {
        return Err(eyre::eyre!("task texts changed between reloads"));
    }
    let reused = first
        .columns()
        .iter()
        .flat_map(|column| column.tasks())
        .any(|task| second.contains_task(task.id()));
    if reused {
        return Err(eyre::eyre!("an identifier survived the reload"));
    }
    Ok(())
}
