//! Application services for the task board.

mod intake;
mod store;
mod subject;

pub use intake::{IntakeError, ItemIntake, NewItemForm, REJECTION_NOTICE};
pub use store::{DefaultItemStore, ItemStore, MoveOutcome};
pub use subject::Subject;
