//! Domain model for the task board.
//!
//! Work items and their status are plain data. Every mutation goes through
//! the item store in [`crate::board::services`].

mod error;
mod ids;
mod item;

pub use error::ParseItemStatusError;
pub use ids::{Effort, WorkItemId};
pub(crate) use ids::write_decimal;
pub use item::{ItemStatus, NewWorkItem, WorkItem};
