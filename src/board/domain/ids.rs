//! Identifier and scalar types for the board domain.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Opaque identity token of a work item.
///
/// Tokens are generated once at creation time and never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItemId(String);

impl WorkItemId {
    /// Wraps an existing token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Creates a token from a random UUID.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WorkItemId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for WorkItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WorkItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hundredths in one person-day.
const HUNDREDTHS_PER_DAY: u32 = 100;

/// Estimated effort of a work item, in person-days.
///
/// Stored as whole hundredths of a person-day so fractional input survives
/// without floating-point arithmetic. The board never validates the
/// magnitude itself; positivity is checked when the item is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Effort(u32);

impl Effort {
    /// Creates an effort of `days` whole person-days.
    #[must_use]
    pub const fn new(days: u32) -> Self {
        Self(days.saturating_mul(HUNDREDTHS_PER_DAY))
    }

    /// Creates an effort of `hundredths` hundredths of a person-day.
    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Converts a number of person-days, rounded to the nearest hundredth.
    ///
    /// Returns `None` for `NaN`, infinities, negative values and values too
    /// large to represent.
    #[must_use]
    pub fn from_fractional_days(days: f64) -> Option<Self> {
        if !days.is_finite() || days.is_sign_negative() {
            return None;
        }
        let rounded = format!("{days:.2}");
        let (whole, fraction) = rounded.split_once('.')?;
        let hundredths = whole
            .parse::<u32>()
            .ok()?
            .checked_mul(HUNDREDTHS_PER_DAY)?
            .checked_add(fraction.parse::<u32>().ok()?)?;
        Some(Self(hundredths))
    }

    /// Returns the whole person-days, dropping any fraction.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self.0.checked_div(HUNDREDTHS_PER_DAY) {
            Some(days) => days,
            None => 0,
        }
    }

    /// Returns the effort in hundredths of a person-day.
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }
}

impl From<u32> for Effort {
    fn from(days: u32) -> Self {
        Self::new(days)
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = self.0.checked_rem(HUNDREDTHS_PER_DAY).unwrap_or(0);
        write_decimal(f, self.days(), fraction)
    }
}

impl Serialize for Effort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Writes `whole.hundredths` with trailing zeros removed, or just `whole`
/// when there is no fraction.
pub(crate) fn write_decimal(
    f: &mut fmt::Formatter<'_>,
    whole: u32,
    hundredths: u32,
) -> fmt::Result {
    if hundredths == 0 {
        return write!(f, "{whole}");
    }
    let padded = format!("{hundredths:02}");
    write!(f, "{whole}.{}", padded.trim_end_matches('0'))
}
