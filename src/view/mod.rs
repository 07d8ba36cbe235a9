//! View synchronizers and their rendering collaborators.
//!
//! A [`ListView`] shows the items of one status category and is rebuilt
//! from scratch on every store notification. An [`ItemView`] presents a
//! single item and is the unit users drag between lists.

mod item;
mod list;
pub mod mount;
mod node;
pub mod render;

pub use item::{EffortLabel, ItemView};
pub use list::{DROPPABLE_CLASS, ListView};
pub use mount::{InsertPosition, mount};
pub use node::Node;
pub use render::{RenderError, Renderer};
