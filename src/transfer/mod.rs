//! Drag-and-drop transfer protocol.
//!
//! A [`TransferSession`] carries one item identity from a [`DragSource`] to
//! a [`DropTarget`] over the course of a single gesture and, on a validated
//! drop, asks the item store to move the item. The session knows nothing
//! about concrete input events; callers translate platform events into the
//! session's operations.

mod payload;
mod ports;
mod session;

pub use payload::{DataTransfer, DropEffect, MediaType};
pub use ports::{DragSource, DropTarget};
pub use session::{DropOutcome, TransferError, TransferSession, TransferState, TransferSummary};
