//! List view: one status category of the board.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use tracing::{error, warn};

use crate::{
    board::{
        domain::{ItemStatus, WorkItem},
        ports::{ItemIdSource, SubscriptionId},
        services::ItemStore,
    },
    transfer::DropTarget,
};

use super::{ItemView, Node, RenderError, Renderer, mount};

/// Class marking a list that currently accepts the dragged payload.
pub const DROPPABLE_CLASS: &str = "droppable";

/// Keeps the items of one status category in sync with the store and acts
/// as the drop target for that category.
///
/// Handles are cheap to clone and share the same state, which lets one
/// handle live inside the store's listener while another is used by the
/// application.
#[derive(Debug, Clone)]
pub struct ListView {
    kind: ItemStatus,
    days_per_month: u32,
    renderer: Arc<Renderer>,
    state: Arc<RwLock<ListViewState>>,
}

#[derive(Debug)]
struct ListViewState {
    assigned: Vec<WorkItem>,
    header: Node,
    list: Node,
    redraws: u64,
}

impl ListView {
    /// Creates an empty list view for `kind` items.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the list header fails to render.
    pub fn new(
        kind: ItemStatus,
        renderer: Arc<Renderer>,
        days_per_month: u32,
    ) -> Result<Self, RenderError> {
        let header = renderer.render_list_header(kind)?;
        let list = Node::new("ul").with_id(format!("{kind}-projects-list"));
        let state = ListViewState {
            assigned: Vec::new(),
            header,
            list,
            redraws: 0,
        };
        Ok(Self {
            kind,
            days_per_month,
            renderer,
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Subscribes this view to every future change of `store`.
    pub fn attach<I, C>(&self, store: &mut ItemStore<I, C>) -> SubscriptionId
    where
        I: ItemIdSource,
        C: Clock + Send + Sync,
    {
        let view = self.clone();
        store.subscribe(move |items: Vec<WorkItem>| view.sync(items))
    }

    /// Replaces the assigned items with those of this view's category and
    /// redraws the list from scratch.
    pub fn sync(&self, items: Vec<WorkItem>) {
        let assigned: Vec<WorkItem> = items
            .into_iter()
            .filter(|item| item.status() == self.kind)
            .collect();

        let mut state = self.write_state();
        state.assigned = assigned;
        self.redraw(&mut state);
    }

    /// Returns the category shown by this view.
    #[must_use]
    pub const fn kind(&self) -> ItemStatus {
        self.kind
    }

    /// Returns a copy of the currently assigned items.
    #[must_use]
    pub fn assigned(&self) -> Vec<WorkItem> {
        self.read_state().assigned.clone()
    }

    /// Returns how many times the list has been redrawn.
    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.read_state().redraws
    }

    /// Returns `true` while the list advertises itself as a drop target.
    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.read_state().list.has_class(DROPPABLE_CLASS)
    }

    /// Returns the id of the list element.
    #[must_use]
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.kind)
    }

    /// Returns a copy of the rendered view.
    #[must_use]
    pub fn host(&self) -> Node {
        let state = self.read_state();
        Node::new("section")
            .with_id(format!("{}-projects", self.kind))
            .with_child(state.header.clone())
            .with_child(state.list.clone())
    }

    fn redraw(&self, state: &mut ListViewState) {
        mount::clear(&mut state.list);
        for item in &state.assigned {
            let view = ItemView::new(item.clone(), self.days_per_month);
            if let Err(err) = view.mount_into(&mut state.list, &self.renderer) {
                error!(item_id = %item.id(), %err, "item render failed");
            }
        }
        state.redraws = state.redraws.saturating_add(1);
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ListViewState> {
        self.state.read().unwrap_or_else(|poisoned| {
            warn!(kind = %self.kind, "recovering poisoned list view state");
            poisoned.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ListViewState> {
        self.state.write().unwrap_or_else(|poisoned| {
            warn!(kind = %self.kind, "recovering poisoned list view state");
            poisoned.into_inner()
        })
    }
}

impl DropTarget for ListView {
    fn target_status(&self) -> ItemStatus {
        self.kind
    }

    fn set_droppable(&self, droppable: bool) {
        self.write_state().list.set_class(DROPPABLE_CLASS, droppable);
    }
}
