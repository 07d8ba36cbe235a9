//! Error types for board domain parsing.

use thiserror::Error;

/// Error returned while parsing an item status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown item status: {0}")]
pub struct ParseItemStatusError(pub String);
