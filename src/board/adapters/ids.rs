//! Identifier sources.

use crate::board::{domain::WorkItemId, ports::ItemIdSource};

/// Random UUID-based identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl ItemIdSource for RandomIdSource {
    fn next_id(&mut self) -> WorkItemId {
        WorkItemId::random()
    }
}

/// Monotonic `"{prefix}-{n}"` identifiers, starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    next: u64,
}

impl SequentialIdSource {
    /// Creates a source emitting `"{prefix}-1"`, `"{prefix}-2"`, ...
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new("item")
    }
}

impl ItemIdSource for SequentialIdSource {
    fn next_id(&mut self) -> WorkItemId {
        let id = WorkItemId::new(format!("{}-{}", self.prefix, self.next));
        self.next = self.next.saturating_add(1);
        id
    }
}
