//! Identifier source port.

use crate::board::domain::WorkItemId;

/// Mints candidate identifiers for new work items.
///
/// Sources are not required to be collision free; the store rejects
/// candidates that are already taken.
pub trait ItemIdSource: Send {
    /// Returns the next candidate identifier.
    fn next_id(&mut self) -> WorkItemId;
}
