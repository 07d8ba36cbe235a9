//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, status_named};
use rstest_bdd_macros::then;
use taskboard::board::{domain::ItemStatus, services::IntakeError};

#[then(r#"the {list} list shows "{title}""#)]
fn list_shows(world: &BoardWorld, list: String, title: String) -> Result<(), eyre::Report> {
    let status = status_named(&list)?;
    let assigned = world.board.list(status).assigned();

    if !assigned.iter().any(|item| item.title() == title) {
        return Err(eyre::eyre!("the {list} list does not show {title:?}"));
    }
    let item = world.item_titled(&title)?;
    world.rendered_entry(&item)?;
    Ok(())
}

#[then("the {list} list is empty")]
fn list_is_empty(world: &BoardWorld, list: String) -> Result<(), eyre::Report> {
    let status = status_named(&list)?;
    let assigned = world.board.list(status).assigned();

    if !assigned.is_empty() {
        return Err(eyre::eyre!(
            "expected the {list} list to be empty, found {} items",
            assigned.len()
        ));
    }
    Ok(())
}

#[then("the {list} list is not highlighted")]
fn list_is_not_highlighted(world: &BoardWorld, list: String) -> Result<(), eyre::Report> {
    let status = status_named(&list)?;
    if world.board.list(status).is_droppable() {
        return Err(eyre::eyre!("the {list} list is still highlighted"));
    }
    Ok(())
}

#[then("no list is highlighted")]
fn no_list_is_highlighted(world: &BoardWorld) -> Result<(), eyre::Report> {
    let highlighted: Vec<ItemStatus> = ItemStatus::ALL
        .into_iter()
        .filter(|status| world.board.list(*status).is_droppable())
        .collect();
    if !highlighted.is_empty() {
        return Err(eyre::eyre!("lists still highlighted: {highlighted:?}"));
    }
    Ok(())
}

#[then(r#"the item "{title}" displays "{label}""#)]
fn item_displays(world: &BoardWorld, title: String, label: String) -> Result<(), eyre::Report> {
    let item = world.item_titled(&title)?;
    let entry = world.rendered_entry(&item)?;

    if !entry.text().contains(&label) {
        return Err(eyre::eyre!(
            "expected {label:?} in the entry of {title:?}, found {:?}",
            entry.text()
        ));
    }
    Ok(())
}

#[then("the submission is rejected")]
fn submission_is_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;

    if !matches!(result, Err(IntakeError::Rejected(_))) {
        return Err(eyre::eyre!("expected a rejected submission, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the notice "{message}" was raised"#)]
fn notice_was_raised(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let messages = world.notice.messages();
    if messages != vec![message.clone()] {
        return Err(eyre::eyre!(
            "expected exactly the notice {message:?}, found {messages:?}"
        ));
    }
    Ok(())
}
