//! Transfer payload types.

use std::fmt;

use crate::board::domain::WorkItemId;

/// Media type a drag payload is declared under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType(String);

impl MediaType {
    /// The single media type the board produces and accepts.
    pub const BOARD: &'static str = "text/plain";

    /// Creates a media type from its textual form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the board's own media type.
    #[must_use]
    pub fn board() -> Self {
        Self::new(Self::BOARD)
    }

    /// Returns `true` for payloads produced by the board.
    #[must_use]
    pub fn is_board(&self) -> bool {
        self.0 == Self::BOARD
    }

    /// Returns the media type as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Effect a drag source allows for its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropEffect {
    /// The payload is moved to the target.
    Move,
    /// The payload is copied to the target.
    Copy,
    /// No drop is allowed.
    None,
}

/// Payload of one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTransfer {
    media_type: MediaType,
    data: String,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    /// Creates a payload with arbitrary content.
    #[must_use]
    pub fn new(media_type: MediaType, data: impl Into<String>, effect_allowed: DropEffect) -> Self {
        Self {
            media_type,
            data: data.into(),
            effect_allowed,
        }
    }

    /// Creates the board payload moving the item with `id`.
    #[must_use]
    pub fn for_item(id: &WorkItemId) -> Self {
        Self::new(MediaType::board(), id.as_str(), DropEffect::Move)
    }

    /// Returns the declared media type.
    #[must_use]
    pub const fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Returns the raw payload data.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns the allowed drop effect.
    #[must_use]
    pub const fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    /// Reads the carried item identifier.
    #[must_use]
    pub fn item_id(&self) -> WorkItemId {
        WorkItemId::new(self.data.as_str())
    }
}
