//! Attaching rendered nodes to host elements.
//!
//! Both view kinds place their output through [`mount`]; redraws first
//! [`clear`] the host and then mount every node again.

use super::Node;

/// Where a node is inserted among the host's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before all existing children.
    Start,
    /// After all existing children.
    End,
}

/// Attaches `node` to `host` at `position`.
pub fn mount(host: &mut Node, node: Node, position: InsertPosition) {
    let children = host.children_mut();
    match position {
        InsertPosition::Start => children.insert(0, node),
        InsertPosition::End => children.push(node),
    }
}

/// Removes every child of `host`.
pub fn clear(host: &mut Node) {
    host.children_mut().clear();
}
