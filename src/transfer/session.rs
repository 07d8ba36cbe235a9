//! Per-gesture transfer state machine.

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, trace};

use crate::board::{
    domain::ItemStatus,
    ports::ItemIdSource,
    services::{ItemStore, MoveOutcome},
};

use super::{DataTransfer, DragSource, DropTarget};

/// Lifecycle state of a transfer session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A payload is being dragged but no target has accepted it.
    Dragging,
    /// The target assigning the given status has accepted the payload.
    OverTarget(ItemStatus),
    /// The payload was dropped; the gesture has not ended yet.
    Dropped,
}

impl TransferState {
    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Events that arrive outside the single-gesture contract.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransferError {
    /// A gesture started while another one was still in progress.
    #[error("a transfer session is already active")]
    SessionActive,
    /// A gesture event arrived while no gesture was in progress.
    #[error("no transfer session is active")]
    NoActiveSession,
}

/// Result of a drop event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The drop was accepted and the store was asked to move the item.
    Moved(MoveOutcome),
    /// The target had not accepted the payload; nothing happened.
    Rejected,
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSummary {
    /// The payload was dropped onto a target.
    Completed,
    /// The gesture ended without a drop.
    Abandoned,
}

/// Carries one item identity from a drag source to a drop target.
///
/// At most one gesture is tracked at a time. Abandoning a gesture at any
/// point before the drop leaves the store untouched.
#[derive(Debug, Clone, Default)]
pub struct TransferSession {
    state: TransferState,
    payload: Option<DataTransfer>,
}

impl TransferSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TransferState::Idle,
            payload: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> TransferState {
        self.state
    }

    /// Returns the payload of the gesture in progress.
    #[must_use]
    pub const fn payload(&self) -> Option<&DataTransfer> {
        self.payload.as_ref()
    }

    /// Starts a gesture carrying the payload of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::SessionActive`] when a gesture is already in
    /// progress.
    pub fn begin(&mut self, source: &impl DragSource) -> Result<(), TransferError> {
        self.begin_foreign(source.drag_payload())
    }

    /// Starts a gesture carrying an arbitrary payload, such as one coming
    /// from outside the board.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::SessionActive`] when a gesture is already in
    /// progress.
    pub fn begin_foreign(&mut self, payload: DataTransfer) -> Result<(), TransferError> {
        if self.state.is_active() {
            return Err(TransferError::SessionActive);
        }
        debug!(
            media_type = %payload.media_type(),
            data = payload.data(),
            "transfer started"
        );
        self.payload = Some(payload);
        self.state = TransferState::Dragging;
        Ok(())
    }

    /// Handles the payload hovering over `target`.
    ///
    /// Only board payloads are accepted. Accepting highlights the target
    /// and returns `true`; otherwise the platform's default rejection
    /// applies and `false` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] when no gesture is in
    /// progress.
    pub fn drag_over(&mut self, target: &impl DropTarget) -> Result<bool, TransferError> {
        self.ensure_active()?;
        if self.state == TransferState::Dropped {
            return Ok(false);
        }

        let understood = self
            .payload
            .as_ref()
            .is_some_and(|payload| payload.media_type().is_board());
        if !understood {
            trace!(target_status = %target.target_status(), "foreign payload ignored");
            return Ok(false);
        }

        target.set_droppable(true);
        self.state = TransferState::OverTarget(target.target_status());
        Ok(true)
    }

    /// Handles the payload leaving `target`.
    ///
    /// The highlight is removed and, if the session was over this target,
    /// it returns to dragging with its payload intact.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] when no gesture is in
    /// progress.
    pub fn drag_leave(&mut self, target: &impl DropTarget) -> Result<(), TransferError> {
        self.ensure_active()?;
        target.set_droppable(false);
        if self.state == TransferState::OverTarget(target.target_status()) {
            self.state = TransferState::Dragging;
        }
        Ok(())
    }

    /// Handles a drop onto `target`.
    ///
    /// A drop is only honoured on the target the session is currently
    /// over; the carried item is then moved to the target's status.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] when no gesture is in
    /// progress.
    pub fn drop_on<I, C>(
        &mut self,
        target: &impl DropTarget,
        store: &mut ItemStore<I, C>,
    ) -> Result<DropOutcome, TransferError>
    where
        I: ItemIdSource,
        C: Clock + Send + Sync,
    {
        self.ensure_active()?;
        let status = target.target_status();
        let item_id = match (&self.payload, self.state) {
            (Some(payload), TransferState::OverTarget(over)) if over == status => {
                payload.item_id()
            }
            _ => {
                debug!(target_status = %status, state = ?self.state, "drop rejected");
                return Ok(DropOutcome::Rejected);
            }
        };

        target.set_droppable(false);
        self.state = TransferState::Dropped;
        let outcome = store.move_item(&item_id, status);
        debug!(item_id = %item_id, target_status = %status, "transfer dropped");
        Ok(DropOutcome::Moved(outcome))
    }

    /// Ends the gesture started from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] when no gesture is in
    /// progress.
    pub fn end(&mut self, source: &impl DragSource) -> Result<TransferSummary, TransferError> {
        self.ensure_active()?;
        source.drag_ended();
        self.finish()
    }

    /// Ends the gesture without notifying a source.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NoActiveSession`] when no gesture is in
    /// progress.
    pub fn finish(&mut self) -> Result<TransferSummary, TransferError> {
        self.ensure_active()?;
        let summary = if self.state == TransferState::Dropped {
            TransferSummary::Completed
        } else {
            TransferSummary::Abandoned
        };
        self.state = TransferState::Idle;
        self.payload = None;
        debug!(?summary, "transfer ended");
        Ok(summary)
    }

    const fn ensure_active(&self) -> Result<(), TransferError> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(TransferError::NoActiveSession)
        }
    }
}
