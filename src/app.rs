//! Application context wiring the board together.
//!
//! [`TaskBoard`] owns the single item store and hands it to the components
//! that mutate it. Its event methods are the boundary where platform input
//! (form submissions, drag events) enters the board.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use thiserror::Error;

use crate::{
    board::{
        adapters::{LogNotice, RandomIdSource},
        domain::{ItemStatus, WorkItem, WorkItemId},
        ports::{ItemIdSource, Notice},
        services::{IntakeError, ItemIntake, ItemStore, NewItemForm},
    },
    config::BoardConfig,
    transfer::{DataTransfer, DropOutcome, TransferError, TransferSession, TransferSummary},
    view::{InsertPosition, ItemView, ListView, Node, RenderError, Renderer, mount},
};

/// Errors raised by board event handlers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The event broke the single-gesture contract.
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// A drag started from an item the board does not show.
    #[error("unknown work item: {0}")]
    UnknownItem(WorkItemId),

    /// A view failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Board using random identifiers, the system clock and logged notices.
pub type DefaultTaskBoard = TaskBoard<RandomIdSource, DefaultClock, LogNotice>;

/// The running board: one store, one list view per status, and at most one
/// drag gesture in flight.
pub struct TaskBoard<I, C, N>
where
    I: ItemIdSource,
    C: Clock + Send + Sync,
    N: Notice,
{
    config: BoardConfig,
    store: ItemStore<I, C>,
    intake: ItemIntake<N>,
    renderer: Arc<Renderer>,
    active: ListView,
    finished: ListView,
    session: TransferSession,
    dragged: Option<ItemView>,
}

impl DefaultTaskBoard {
    /// Builds a board with production collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the built-in templates fail to compile.
    pub fn with_config(config: BoardConfig) -> Result<Self, RenderError> {
        Self::new(config, RandomIdSource, Arc::new(DefaultClock), LogNotice)
    }
}

impl<I, C, N> TaskBoard<I, C, N>
where
    I: ItemIdSource,
    C: Clock + Send + Sync,
    N: Notice,
{
    /// Builds the store, both list views and the intake, and subscribes
    /// the views to the store.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the built-in templates fail to compile.
    pub fn new(config: BoardConfig, ids: I, clock: Arc<C>, notice: N) -> Result<Self, RenderError> {
        let renderer = Arc::new(Renderer::new()?);
        let days_per_month = config.display.days_per_month;
        let mut store = ItemStore::new(ids, clock);
        let active = ListView::new(ItemStatus::Active, Arc::clone(&renderer), days_per_month)?;
        let finished =
            ListView::new(ItemStatus::Finished, Arc::clone(&renderer), days_per_month)?;
        active.attach(&mut store);
        finished.attach(&mut store);
        let intake = ItemIntake::new(config.intake.clone(), notice);

        Ok(Self {
            config,
            store,
            intake,
            renderer,
            active,
            finished,
            session: TransferSession::new(),
            dragged: None,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the item store.
    #[must_use]
    pub const fn store(&self) -> &ItemStore<I, C> {
        &self.store
    }

    /// Returns mutable access to the item store.
    pub const fn store_mut(&mut self) -> &mut ItemStore<I, C> {
        &mut self.store
    }

    /// Returns the list view showing `status` items.
    #[must_use]
    pub const fn list(&self, status: ItemStatus) -> &ListView {
        match status {
            ItemStatus::Active => &self.active,
            ItemStatus::Finished => &self.finished,
        }
    }

    /// Returns the drag gesture state.
    #[must_use]
    pub const fn session(&self) -> &TransferSession {
        &self.session
    }

    /// Handles a submission of the new-item form.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Rejected`] when the form does not validate.
    pub fn submit(&mut self, form: &mut NewItemForm) -> Result<WorkItem, IntakeError> {
        self.intake.submit(form, &mut self.store)
    }

    /// Handles a drag starting on the item with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownItem`] for items not on the board and
    /// [`BoardError::Transfer`] while another gesture is in progress.
    pub fn drag_start(&mut self, id: &WorkItemId) -> Result<(), BoardError> {
        let item = self
            .store
            .find(id)
            .cloned()
            .ok_or_else(|| BoardError::UnknownItem(id.clone()))?;
        let view = ItemView::new(item, self.config.display.days_per_month);
        self.session.begin(&view)?;
        self.dragged = Some(view);
        Ok(())
    }

    /// Handles a drag carrying a payload from outside the board.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::SessionActive`] while another gesture is in
    /// progress.
    pub fn drag_start_foreign(&mut self, payload: DataTransfer) -> Result<(), TransferError> {
        self.session.begin_foreign(payload)
    }

    /// Handles the payload hovering over the `status` list.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] outside a gesture.
    pub fn drag_over(&mut self, status: ItemStatus) -> Result<bool, TransferError> {
        let target = match status {
            ItemStatus::Active => &self.active,
            ItemStatus::Finished => &self.finished,
        };
        self.session.drag_over(target)
    }

    /// Handles the payload leaving the `status` list.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] outside a gesture.
    pub fn drag_leave(&mut self, status: ItemStatus) -> Result<(), TransferError> {
        let target = match status {
            ItemStatus::Active => &self.active,
            ItemStatus::Finished => &self.finished,
        };
        self.session.drag_leave(target)
    }

    /// Handles a drop onto the `status` list.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] outside a gesture.
    pub fn drop_on(&mut self, status: ItemStatus) -> Result<DropOutcome, TransferError> {
        let target = match status {
            ItemStatus::Active => &self.active,
            ItemStatus::Finished => &self.finished,
        };
        self.session.drop_on(target, &mut self.store)
    }

    /// Handles the end of the current gesture.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] outside a gesture.
    pub fn drag_end(&mut self) -> Result<TransferSummary, TransferError> {
        let summary = match self.dragged.as_ref() {
            Some(source) => self.session.end(source),
            None => self.session.finish(),
        }?;
        self.dragged = None;
        Ok(summary)
    }

    /// Renders the whole board: the form followed by both lists.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the form template fails to render.
    pub fn render(&self, form: &NewItemForm) -> Result<Node, RenderError> {
        let mut root = Node::new("div").with_id("app");
        mount(&mut root, self.active.host(), InsertPosition::End);
        mount(&mut root, self.finished.host(), InsertPosition::End);
        let input = self
            .renderer
            .render_input(&form.title, &form.description, &form.effort)?;
        mount(&mut root, input, InsertPosition::Start);
        Ok(root)
    }
}
