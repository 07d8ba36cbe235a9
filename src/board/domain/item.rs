//! Work item record and its status enumeration.

use super::{Effort, ParseItemStatusError, WorkItemId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board category of a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Work that is still in progress.
    Active,
    /// Work that has been completed.
    Finished,
}

impl ItemStatus {
    /// Every status, in board order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl TryFrom<&str> for ItemStatus {
    type Error = ParseItemStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseItemStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values supplied when a work item is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkItem {
    /// Item title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Estimated effort.
    pub effort: Effort,
}

impl NewWorkItem {
    /// Bundles the creation fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, effort: Effort) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            effort,
        }
    }
}

/// A single task on the board.
///
/// Only the status changes after creation, and only through the item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkItem {
    id: WorkItemId,
    title: String,
    description: String,
    effort: Effort,
    status: ItemStatus,
    created_at: DateTime<Utc>,
}

impl WorkItem {
    /// Creates an `Active` item stamped with the current clock time.
    pub(crate) fn new(id: WorkItemId, fields: NewWorkItem, clock: &impl Clock) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            effort: fields.effort,
            status: ItemStatus::Active,
            created_at: clock.utc(),
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> &WorkItemId {
        &self.id
    }

    /// Returns the item title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the item description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the estimated effort.
    #[must_use]
    pub const fn effort(&self) -> Effort {
        self.effort
    }

    /// Returns the current board category.
    #[must_use]
    pub const fn status(&self) -> ItemStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) const fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }
}
