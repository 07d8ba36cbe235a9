//! The authoritative, observable collection of work items.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::board::{
    adapters::RandomIdSource,
    domain::{Effort, ItemStatus, NewWorkItem, WorkItem, WorkItemId},
    ports::{ItemIdSource, Listener, SubscriptionId},
};

use super::Subject;

/// Number of fresh candidates drawn from the id source before a colliding
/// candidate is disambiguated with a numeric suffix.
const MAX_ID_DRAWS: usize = 16;

/// Result of [`ItemStore::move_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The item changed category.
    Moved {
        /// Status before the move.
        from: ItemStatus,
        /// Status after the move.
        to: ItemStatus,
    },
    /// The item already had the requested status.
    Unchanged,
    /// No item has the requested identifier.
    NotFound,
}

impl MoveOutcome {
    /// Returns `true` when an item's status actually changed.
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Returns a short label for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Moved { .. } => "moved",
            Self::Unchanged => "unchanged",
            Self::NotFound => "not_found",
        }
    }
}

/// Store backed by random identifiers and the system clock.
pub type DefaultItemStore = ItemStore<RandomIdSource, DefaultClock>;

/// Single source of truth for the board's work items.
///
/// Items are kept in insertion order. Every mutation is followed by a
/// synchronous notification of all listeners, in registration order, each
/// receiving its own copy of the full sequence. The mutation and its
/// fan-out complete before the call returns.
#[derive(Debug)]
pub struct ItemStore<I, C>
where
    I: ItemIdSource,
    C: Clock + Send + Sync,
{
    items: Vec<WorkItem>,
    subject: Subject<WorkItem>,
    ids: I,
    clock: Arc<C>,
}

impl DefaultItemStore {
    /// Creates an empty store with random identifiers and the system clock.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RandomIdSource, Arc::new(DefaultClock))
    }
}

impl<I, C> ItemStore<I, C>
where
    I: ItemIdSource,
    C: Clock + Send + Sync,
{
    /// Creates an empty store.
    #[must_use]
    pub const fn new(ids: I, clock: Arc<C>) -> Self {
        Self {
            items: Vec::new(),
            subject: Subject::new(),
            ids,
            clock,
        }
    }

    /// Registers a listener for every future mutation.
    pub fn subscribe(&mut self, listener: impl Listener<WorkItem> + 'static) -> SubscriptionId {
        let id = self.subject.subscribe(listener);
        debug!(subscription = %id, "store listener registered");
        id
    }

    /// Removes a listener registration, returning whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subject.unsubscribe(id)
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subject.len()
    }

    /// Appends a new `Active` item and notifies every listener.
    ///
    /// No validation happens here; callers validate input beforehand.
    /// Returns a copy of the created item.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        effort: impl Into<Effort>,
    ) -> WorkItem {
        let id = self.next_unique_id();
        let fields = NewWorkItem::new(title, description, effort.into());
        let item = WorkItem::new(id, fields, &*self.clock);
        debug!(item_id = %item.id(), effort = %item.effort(), "work item added");

        self.items.push(item.clone());
        self.notify();
        item
    }

    /// Sets the status of the item with `id` and notifies every listener.
    ///
    /// Unknown identifiers and items that already have `status` are left
    /// untouched, but listeners are notified regardless, so they must
    /// tolerate redundant redraws.
    pub fn move_item(&mut self, id: &WorkItemId, status: ItemStatus) -> MoveOutcome {
        let outcome = match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) if item.status() != status => {
                let from = item.status();
                item.set_status(status);
                MoveOutcome::Moved { from, to: status }
            }
            Some(_) => MoveOutcome::Unchanged,
            None => MoveOutcome::NotFound,
        };
        debug!(
            item_id = %id,
            status = status.as_str(),
            outcome = outcome.as_str(),
            "work item move requested"
        );

        self.notify();
        outcome
    }

    /// Returns the items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    /// Returns an owned copy of the items in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<WorkItem> {
        self.items.clone()
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn find(&self, id: &WorkItemId) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn notify(&mut self) {
        self.subject.publish(&self.items);
    }

    fn contains(&self, id: &WorkItemId) -> bool {
        self.find(id).is_some()
    }

    /// Draws identifiers until one is unused, falling back to a numeric
    /// suffix when the source keeps colliding.
    fn next_unique_id(&mut self) -> WorkItemId {
        let mut candidate = self.ids.next_id();
        let mut draws = 1;
        while self.contains(&candidate) && draws < MAX_ID_DRAWS {
            debug!(item_id = %candidate, "identifier collision, drawing again");
            candidate = self.ids.next_id();
            draws += 1;
        }
        if !self.contains(&candidate) {
            return candidate;
        }

        let mut suffix: u64 = 1;
        loop {
            let suffixed = WorkItemId::new(format!("{candidate}-{suffix}"));
            if !self.contains(&suffixed) {
                return suffixed;
            }
            suffix = suffix.saturating_add(1);
        }
    }
}
