//! Generic publish/subscribe fan-out.

use std::fmt;

use crate::board::ports::{Listener, SubscriptionId};

/// Ordered set of listeners that all receive a copy of every published
/// sequence.
pub struct Subject<T> {
    listeners: Vec<(SubscriptionId, Box<dyn Listener<T>>)>,
    next_id: u64,
}

impl<T> Subject<T> {
    /// Creates a subject with no listeners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a listener after all existing ones.
    ///
    /// Registering the same logic twice yields two independent
    /// registrations.
    pub fn subscribe(&mut self, listener: impl Listener<T> + 'static) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a registration, returning whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` when nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T: Clone> Subject<T> {
    /// Hands each listener its own copy of `items`, in registration order.
    pub fn publish(&mut self, items: &[T]) {
        for (_, listener) in &mut self.listeners {
            listener.notify(items.to_vec());
        }
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
