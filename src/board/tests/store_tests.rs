//! Unit tests for the observable item store.

use std::sync::{Arc, Mutex};

use crate::board::{
    adapters::SequentialIdSource,
    domain::{ItemStatus, WorkItem, WorkItemId},
    ports::ItemIdSource,
    services::{ItemStore, MoveOutcome},
};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestStore = ItemStore<SequentialIdSource, DefaultClock>;
type Notifications = Arc<Mutex<Vec<Vec<WorkItem>>>>;

mockall::mock! {
    IdSource {}

    impl ItemIdSource for IdSource {
        fn next_id(&mut self) -> WorkItemId;
    }
}

#[fixture]
fn store() -> TestStore {
    ItemStore::new(SequentialIdSource::default(), Arc::new(DefaultClock))
}

/// Subscribes a listener that records every snapshot it receives.
fn record(store: &mut TestStore) -> Notifications {
    let received: Notifications = Arc::default();
    let sink = Arc::clone(&received);
    store.subscribe(move |items: Vec<WorkItem>| {
        if let Ok(mut seen) = sink.lock() {
            seen.push(items);
        }
    });
    received
}

fn count(notifications: &Notifications) -> usize {
    notifications.lock().map(|seen| seen.len()).unwrap_or_default()
}

fn last(notifications: &Notifications) -> Option<Vec<WorkItem>> {
    notifications
        .lock()
        .ok()
        .and_then(|seen| seen.last().cloned())
}

#[rstest]
#[case("Build API", "Design and implement", 10)]
#[case("Migrate DB", "Schema migration plan", 40)]
#[case("x", "", 0)]
fn add_appends_one_active_item(
    mut store: TestStore,
    #[case] title: &str,
    #[case] description: &str,
    #[case] effort: u32,
) -> eyre::Result<()> {
    store.add("Existing", "Already on the board", 3);
    let before = store.len();

    let item = store.add(title, description, effort);

    ensure!(store.len() == before + 1);
    ensure!(item.status() == ItemStatus::Active);
    ensure!(item.title() == title);
    ensure!(item.effort().days() == effort);
    ensure!(store.items().last() == Some(&item));
    Ok(())
}

#[rstest]
fn add_notifies_with_full_snapshot(mut store: TestStore) -> eyre::Result<()> {
    let notifications = record(&mut store);

    let first = store.add("Build API", "Design and implement", 10);
    let second = store.add("Migrate DB", "Schema migration plan", 40);

    ensure!(count(&notifications) == 2);
    ensure!(last(&notifications) == Some(vec![first, second]));
    Ok(())
}

#[rstest]
fn add_invokes_every_listener_once_in_registration_order(
    mut store: TestStore,
) -> eyre::Result<()> {
    let order = Arc::new(Mutex::new(Vec::new()));
    for index in 0..4 {
        let sink = Arc::clone(&order);
        store.subscribe(move |_: Vec<WorkItem>| {
            if let Ok(mut calls) = sink.lock() {
                calls.push(index);
            }
        });
    }

    store.add("Build API", "Design and implement", 10);

    let calls = order
        .lock()
        .map(|recorded| recorded.clone())
        .unwrap_or_default();
    ensure!(calls == vec![0, 1, 2, 3], "unexpected call order {calls:?}");
    Ok(())
}

#[rstest]
fn duplicate_registrations_are_all_honoured(mut store: TestStore) -> eyre::Result<()> {
    let calls = Arc::new(Mutex::new(0_usize));
    for _ in 0..2 {
        let sink = Arc::clone(&calls);
        store.subscribe(move |_: Vec<WorkItem>| {
            if let Ok(mut total) = sink.lock() {
                *total += 1;
            }
        });
    }

    store.add("Build API", "Design and implement", 10);

    ensure!(calls.lock().map(|total| *total).unwrap_or_default() == 2);
    ensure!(store.subscriber_count() == 2);
    Ok(())
}

#[rstest]
fn move_changes_status_in_place(mut store: TestStore) -> eyre::Result<()> {
    let first = store.add("Build API", "Design and implement", 10);
    let second = store.add("Migrate DB", "Schema migration plan", 40);

    let outcome = store.move_item(first.id(), ItemStatus::Finished);

    ensure!(
        outcome
            == MoveOutcome::Moved {
                from: ItemStatus::Active,
                to: ItemStatus::Finished
            }
    );
    let ids: Vec<&WorkItemId> = store.items().iter().map(WorkItem::id).collect();
    ensure!(ids == vec![first.id(), second.id()], "move must not reorder");
    let moved = store
        .find(first.id())
        .ok_or_else(|| eyre::eyre!("moved item missing"))?;
    ensure!(moved.status() == ItemStatus::Finished);
    ensure!(moved.title() == first.title());
    ensure!(moved.created_at() == first.created_at());
    Ok(())
}

#[rstest]
fn move_to_current_status_is_a_notified_no_op(mut store: TestStore) -> eyre::Result<()> {
    let item = store.add("Build API", "Design and implement", 10);
    let notifications = record(&mut store);
    let before = store.snapshot();

    let outcome = store.move_item(item.id(), ItemStatus::Active);

    ensure!(outcome == MoveOutcome::Unchanged);
    ensure!(store.snapshot() == before);
    ensure!(count(&notifications) == 1);
    Ok(())
}

#[rstest]
fn move_of_unknown_id_is_a_notified_no_op(mut store: TestStore) -> eyre::Result<()> {
    store.add("Build API", "Design and implement", 10);
    let notifications = record(&mut store);
    let before = store.snapshot();

    let outcome = store.move_item(&WorkItemId::from("forged"), ItemStatus::Finished);

    if outcome != MoveOutcome::NotFound {
        bail!("expected NotFound, got {outcome:?}");
    }
    ensure!(store.snapshot() == before);
    ensure!(count(&notifications) == 1);
    ensure!(last(&notifications) == Some(before));
    Ok(())
}

#[rstest]
fn mutating_a_snapshot_does_not_leak_into_the_store(mut store: TestStore) -> eyre::Result<()> {
    store.subscribe(|mut items: Vec<WorkItem>| {
        items.clear();
    });
    let notifications = record(&mut store);

    let first = store.add("Build API", "Design and implement", 10);
    if let Ok(mut seen) = notifications.lock() {
        if let Some(snapshot) = seen.last_mut() {
            snapshot.clear();
        }
    }
    let second = store.add("Migrate DB", "Schema migration plan", 40);

    ensure!(last(&notifications) == Some(vec![first, second]));
    ensure!(store.len() == 2);
    Ok(())
}

#[rstest]
fn unsubscribed_listeners_are_not_notified(mut store: TestStore) -> eyre::Result<()> {
    let calls = Arc::new(Mutex::new(0_usize));
    let sink = Arc::clone(&calls);
    let subscription = store.subscribe(move |_: Vec<WorkItem>| {
        if let Ok(mut total) = sink.lock() {
            *total += 1;
        }
    });

    ensure!(store.unsubscribe(subscription));
    ensure!(!store.unsubscribe(subscription));
    store.add("Build API", "Design and implement", 10);

    ensure!(calls.lock().map(|total| *total).unwrap_or_default() == 0);
    Ok(())
}

#[test]
fn colliding_id_source_still_yields_unique_ids() -> eyre::Result<()> {
    let mut ids = MockIdSource::new();
    ids.expect_next_id()
        .returning(|| WorkItemId::from("dup"));
    let mut store = ItemStore::new(ids, Arc::new(DefaultClock));

    let first = store.add("One", "First item", 1);
    let second = store.add("Two", "Second item", 2);
    let third = store.add("Three", "Third item", 3);

    ensure!(first.id().as_str() == "dup");
    ensure!(second.id().as_str() == "dup-1");
    ensure!(third.id().as_str() == "dup-2");
    Ok(())
}

#[test]
fn collision_is_resolved_by_drawing_again() -> eyre::Result<()> {
    let mut ids = MockIdSource::new();
    let mut sequence = mockall::Sequence::new();
    for token in ["a", "a", "b"] {
        ids.expect_next_id()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(move || WorkItemId::from(token));
    }
    let mut store = ItemStore::new(ids, Arc::new(DefaultClock));

    let first = store.add("One", "First item", 1);
    let second = store.add("Two", "Second item", 2);

    ensure!(first.id().as_str() == "a");
    ensure!(second.id().as_str() == "b");
    Ok(())
}
