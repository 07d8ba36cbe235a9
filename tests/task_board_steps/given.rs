//! Given steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::services::NewItemForm;

#[given("an empty task board")]
fn empty_task_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.board.store().is_empty() {
        return Err(eyre::eyre!("scenario world must start empty"));
    }
    Ok(())
}

#[given(r#"a task board with an active item "{title}""#)]
fn board_with_active_item(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let mut form = NewItemForm::new(title, "Seeded for the scenario", "5");
    world
        .board
        .submit(&mut form)
        .wrap_err("seed active item for scenario")?;
    Ok(())
}
