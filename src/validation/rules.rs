//! Individual constraint checks.
//!
//! Each rule inspects one aspect of a value and returns `Ok(())` when the
//! constraint holds or when it does not apply to the value's kind.

use super::{FieldValue, ValidationError};

/// Checks that a value is present.
///
/// Text must be non-empty after trimming. Numbers must be truthy, so zero
/// and `NaN` fail.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] when the value is empty.
pub fn validate_required(value: &FieldValue) -> Result<(), ValidationError> {
    let present = match value {
        FieldValue::Text(text) => !text.trim().is_empty(),
        FieldValue::Number(number) => *number != 0.0 && !number.is_nan(),
    };
    if present {
        Ok(())
    } else {
        Err(ValidationError::Required)
    }
}

/// Checks the minimum character count of text values.
///
/// # Errors
///
/// Returns [`ValidationError::TooShort`] when text has fewer than `min`
/// characters.
pub fn validate_min_length(value: &FieldValue, min: usize) -> Result<(), ValidationError> {
    let FieldValue::Text(text) = value else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { min, actual });
    }
    Ok(())
}

/// Checks the maximum character count of text values.
///
/// # Errors
///
/// Returns [`ValidationError::TooLong`] when text has more than `max`
/// characters.
pub fn validate_max_length(value: &FieldValue, max: usize) -> Result<(), ValidationError> {
    let FieldValue::Text(text) = value else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}

/// Checks the lower bound of numeric values.
///
/// `NaN` never satisfies a bound. A `min` of zero is enforced like any
/// other bound, so negative numbers fail it.
///
/// # Errors
///
/// Returns [`ValidationError::BelowMinimum`] when the number is below `min`.
pub fn validate_min(value: &FieldValue, min: f64) -> Result<(), ValidationError> {
    let FieldValue::Number(actual) = *value else {
        return Ok(());
    };
    if actual >= min {
        Ok(())
    } else {
        Err(ValidationError::BelowMinimum { min, actual })
    }
}

/// Checks the upper bound of numeric values.
///
/// `NaN` never satisfies a bound. A `max` of zero is enforced like any
/// other bound, so positive numbers fail it.
///
/// # Errors
///
/// Returns [`ValidationError::AboveMaximum`] when the number is above `max`.
pub fn validate_max(value: &FieldValue, max: f64) -> Result<(), ValidationError> {
    let FieldValue::Number(actual) = *value else {
        return Ok(());
    };
    if actual <= max {
        Ok(())
    } else {
        Err(ValidationError::AboveMaximum { max, actual })
    }
}
