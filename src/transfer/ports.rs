//! Roles a component plays in a transfer.

use crate::board::domain::ItemStatus;

use super::DataTransfer;

/// A component the user can start dragging.
pub trait DragSource {
    /// Builds the payload written when the gesture starts.
    fn drag_payload(&self) -> DataTransfer;

    /// Called once when the gesture ends, whatever its outcome.
    fn drag_ended(&self);
}

/// A region that items can be dropped onto.
pub trait DropTarget {
    /// Status assigned to items dropped here.
    fn target_status(&self) -> ItemStatus;

    /// Shows or hides the "can drop here" affordance.
    fn set_droppable(&self, droppable: bool);
}
