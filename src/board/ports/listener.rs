//! Listener port for store notifications.

use std::fmt;

/// Receives a full snapshot after every store mutation.
///
/// Each call gets its own copy, so a listener may consume or mutate the
/// snapshot freely.
pub trait Listener<T>: Send {
    /// Handles one notification.
    fn notify(&mut self, snapshot: Vec<T>);
}

impl<T, F> Listener<T> for F
where
    F: FnMut(Vec<T>) + Send,
{
    fn notify(&mut self, snapshot: Vec<T>) {
        self(snapshot);
    }
}

/// Handle identifying one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a handle from its raw sequence value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}
