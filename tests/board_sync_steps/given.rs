//! Given steps for board synchronisation BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("no board file exists")]
fn no_board_file(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if world.dir.path().join("PROJECTS.md").exists() {
        return Err(eyre::eyre!("board file {} should not exist yet", world.path));
    }
    Ok(())
}

#[given(r#"a board file with "{first}" in "{first_column}" and "{second}" in "{second_column}""#)]
fn board_file_with_tasks(
    world: &mut BoardWorld,
    first: String,
    first_column: String,
    second: String,
    second_column: String,
) -> Result<(), eyre::Report> {
    let contents = format!(
        "# Projects\n\n## {first_column}\n- [ ] {first}\n\n## {second_column}\n- [ ] {second}\n"
    );
    std::fs::write(world.path.as_std_path(), contents).wrap_err("write initial board file")?;
    Ok(())
}
