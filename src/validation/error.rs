//! Error types for field validation.

use thiserror::Error;

/// A violated field constraint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A required value is empty, zero, or not a number.
    #[error("value is required")]
    Required,

    /// Text is shorter than the configured minimum.
    #[error("text has {actual} characters, fewer than the minimum of {min}")]
    TooShort {
        /// Minimum number of characters.
        min: usize,
        /// Actual number of characters.
        actual: usize,
    },

    /// Text is longer than the configured maximum.
    #[error("text has {actual} characters, more than the maximum of {max}")]
    TooLong {
        /// Maximum number of characters.
        max: usize,
        /// Actual number of characters.
        actual: usize,
    },

    /// A number is below the configured minimum.
    #[error("value {actual} is below the minimum of {min}")]
    BelowMinimum {
        /// Smallest accepted value.
        min: f64,
        /// Rejected value.
        actual: f64,
    },

    /// A number is above the configured maximum.
    #[error("value {actual} is above the maximum of {max}")]
    AboveMaximum {
        /// Largest accepted value.
        max: f64,
        /// Rejected value.
        actual: f64,
    },

    /// A named form field failed validation.
    #[error("field '{field}' is invalid: {source}")]
    Field {
        /// Name of the form field.
        field: &'static str,
        /// The violated constraint.
        source: Box<Self>,
    },

    /// Several constraints failed at once.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Attributes an error to a named form field.
    #[must_use]
    pub fn for_field(field: &'static str, error: Self) -> Self {
        Self::Field {
            field,
            source: Box::new(error),
        }
    }

    /// Folds collected errors into a result.
    ///
    /// No errors is success, a single error is returned as-is, and anything
    /// more is wrapped in [`ValidationError::Multiple`].
    ///
    /// # Errors
    ///
    /// Returns the combined error when `errors` is not empty.
    pub fn collect(errors: Vec<Self>) -> Result<(), Self> {
        let mut remaining = errors.into_iter();
        match (remaining.next(), remaining.next()) {
            (None, _) => Ok(()),
            (Some(only), None) => Err(only),
            (Some(first), Some(second)) => Err(Self::Multiple(
                [first, second].into_iter().chain(remaining).collect(),
            )),
        }
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}
