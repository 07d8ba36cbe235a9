//! Port contracts for the task board.
//!
//! Ports keep the store and the intake independent of how identifiers are
//! minted, how listeners react, and how users are told about rejected input.

pub mod id_source;
pub mod listener;
pub mod notice;

pub use id_source::ItemIdSource;
pub use listener::{Listener, SubscriptionId};
pub use notice::Notice;
