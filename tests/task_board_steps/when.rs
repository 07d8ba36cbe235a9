//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, status_named};
use rstest_bdd_macros::when;
use taskboard::{
    board::services::NewItemForm,
    transfer::{DataTransfer, DropEffect, MediaType},
};

#[when(
    r#"the form is submitted with title "{title}", description "{description}" and effort "{effort}""#
)]
fn submit_form(world: &mut BoardWorld, title: String, description: String, effort: String) {
    let mut form = NewItemForm::new(title, description, effort);
    world.last_submission = Some(world.board.submit(&mut form));
}

#[when(r#"the item "{title}" is dragged onto the {list} list"#)]
fn drag_onto_list(
    world: &mut BoardWorld,
    title: String,
    list: String,
) -> Result<(), eyre::Report> {
    let item = world.item_titled(&title)?;
    let target = status_named(&list)?;

    world.board.drag_start(item.id())?;
    if !world.board.drag_over(target)? {
        return Err(eyre::eyre!("the {list} list refused the item"));
    }
    world.board.drop_on(target)?;
    world.board.drag_end()?;
    Ok(())
}

#[when(r#"the item "{title}" is dragged over the {list} list and released elsewhere"#)]
fn drag_over_and_abandon(
    world: &mut BoardWorld,
    title: String,
    list: String,
) -> Result<(), eyre::Report> {
    let item = world.item_titled(&title)?;
    let target = status_named(&list)?;

    world.board.drag_start(item.id())?;
    world.board.drag_over(target)?;
    world.board.drag_leave(target)?;
    world.board.drag_end()?;
    Ok(())
}

#[when("a link is dragged over the {list} list")]
fn drag_link_over_list(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let target = status_named(&list)?;
    let link = DataTransfer::new(
        MediaType::new("text/uri-list"),
        "https://example.com/",
        DropEffect::Copy,
    );

    world.board.drag_start_foreign(link)?;
    if world.board.drag_over(target)? {
        return Err(eyre::eyre!("the {list} list accepted a link"));
    }
    Ok(())
}
