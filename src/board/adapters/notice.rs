//! Notice adapters.

use std::sync::{Arc, RwLock};

use crate::board::ports::Notice;

/// Reports notices through the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotice;

impl Notice for LogNotice {
    fn alert(&self, message: &str) {
        tracing::warn!(notice = message, "user notice");
    }
}

/// Keeps every notice in memory so callers can inspect them later.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotice {
    messages: Arc<RwLock<Vec<String>>>,
}

impl RecordingNotice {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded notices, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self.messages.read() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notice for RecordingNotice {
    fn alert(&self, message: &str) {
        let mut messages = match self.messages.write() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message.to_owned());
    }
}
