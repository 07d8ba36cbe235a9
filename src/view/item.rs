//! Presentation of a single work item.

use std::fmt;

use tracing::trace;

use crate::{
    board::domain::{Effort, WorkItem, write_decimal},
    transfer::{DataTransfer, DragSource},
};

use super::{InsertPosition, Node, RenderError, Renderer, mount};

/// Display form of an effort, in person-days or person-months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffortLabel {
    /// Shown as person-days, fractions included.
    Days(Effort),
    /// Shown as person-months with up to two decimals.
    Months {
        /// Whole months.
        whole: u32,
        /// Remaining fraction of a month, in hundredths, truncated.
        hundredths: u32,
    },
}

impl EffortLabel {
    /// Chooses the unit for `effort`: days below `days_per_month`, months
    /// from there on. A zero `days_per_month` always yields days.
    #[must_use]
    pub fn from_effort(effort: Effort, days_per_month: u32) -> Self {
        let month = Effort::new(days_per_month).hundredths();
        let amount = effort.hundredths();
        if amount < month {
            return Self::Days(effort);
        }
        let (Some(whole), Some(remainder)) = (amount.checked_div(month), amount.checked_rem(month))
        else {
            return Self::Days(effort);
        };
        let hundredths = u64::from(remainder)
            .saturating_mul(100)
            .checked_div(u64::from(month))
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(0);
        Self::Months { whole, hundredths }
    }
}

impl fmt::Display for EffortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Days(effort) => write!(f, "{effort} person-days"),
            Self::Months { whole, hundredths } => {
                write_decimal(f, whole, hundredths)?;
                f.write_str(" person-months")
            }
        }
    }
}

/// A draggable presentation of one work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    item: WorkItem,
    days_per_month: u32,
}

impl ItemView {
    /// Wraps a copy of `item`.
    #[must_use]
    pub const fn new(item: WorkItem, days_per_month: u32) -> Self {
        Self {
            item,
            days_per_month,
        }
    }

    /// Returns the presented item.
    #[must_use]
    pub const fn item(&self) -> &WorkItem {
        &self.item
    }

    /// Returns the effort in its display unit.
    #[must_use]
    pub fn effort_label(&self) -> EffortLabel {
        EffortLabel::from_effort(self.item.effort(), self.days_per_month)
    }

    /// Produces the visual node of the item.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the item template fails to render.
    pub fn render(&self, renderer: &Renderer) -> Result<Node, RenderError> {
        renderer.render_item(self)
    }

    /// Renders the item and appends it to `host`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the item template fails to render.
    pub fn mount_into(&self, host: &mut Node, renderer: &Renderer) -> Result<(), RenderError> {
        mount(host, self.render(renderer)?, InsertPosition::End);
        Ok(())
    }
}

impl DragSource for ItemView {
    fn drag_payload(&self) -> DataTransfer {
        DataTransfer::for_item(self.item.id())
    }

    fn drag_ended(&self) {
        trace!(item_id = %self.item.id(), "item drag ended");
    }
}
