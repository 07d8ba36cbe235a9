//! Adapter implementations of the board ports.

pub mod ids;
pub mod notice;

pub use ids::{RandomIdSource, SequentialIdSource};
pub use notice::{LogNotice, RecordingNotice};
