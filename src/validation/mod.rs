//! Stateless field validation.
//!
//! A [`Validatable`] pairs a raw field value with the constraints it must
//! satisfy. Length constraints only apply to text and range constraints only
//! apply to numbers; a constraint that does not match the value's kind is
//! ignored.
//!
//! # Examples
//!
//! ```
//! use taskboard::validation::{Validatable, validate};
//!
//! assert!(!validate(&Validatable::text("").required()));
//! assert!(validate(&Validatable::text("abcde").required().min_length(5)));
//! assert!(!validate(&Validatable::number(0.0).required().min(1.0)));
//! ```

mod error;
pub mod rules;

pub use error::ValidationError;

/// Raw value of a form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text, checked untrimmed except for `required`.
    Text(String),
    /// Numeric input; `NaN` marks input that is not a number.
    Number(f64),
}

/// A field value together with the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    /// The value under test.
    pub value: FieldValue,
    /// Whether the value must be present.
    pub required: bool,
    /// Minimum character count for text.
    pub min_length: Option<usize>,
    /// Maximum character count for text.
    pub max_length: Option<usize>,
    /// Smallest accepted number.
    pub min: Option<f64>,
    /// Largest accepted number.
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates an unconstrained value.
    #[must_use]
    pub const fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Creates an unconstrained text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    /// Creates an unconstrained numeric value.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    /// Marks the value as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum text length.
    #[must_use]
    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum text length.
    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the smallest accepted number.
    #[must_use]
    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the largest accepted number.
    #[must_use]
    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Checks every configured constraint, collecting all violations.
///
/// # Errors
///
/// Returns the violated constraint, or [`ValidationError::Multiple`] when
/// more than one fails.
pub fn check(input: &Validatable) -> Result<(), ValidationError> {
    let value = &input.value;
    let outcomes = [
        input
            .required
            .then(|| rules::validate_required(value)),
        input
            .min_length
            .map(|min| rules::validate_min_length(value, min)),
        input
            .max_length
            .map(|max| rules::validate_max_length(value, max)),
        input.min.map(|min| rules::validate_min(value, min)),
        input.max.map(|max| rules::validate_max(value, max)),
    ];

    let errors = outcomes
        .into_iter()
        .flatten()
        .filter_map(Result::err)
        .collect();
    ValidationError::collect(errors)
}

/// Returns whether `input` satisfies all of its constraints.
#[must_use]
pub fn validate(input: &Validatable) -> bool {
    check(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{FieldValue, Validatable, ValidationError, check, rules, validate};
    use rstest::rstest;

    #[rstest]
    #[case(Validatable::text("").required(), false)]
    #[case(Validatable::text("   ").required(), false)]
    #[case(Validatable::text("abcde").required().min_length(5), true)]
    #[case(Validatable::text("abcd").required().min_length(5), false)]
    #[case(Validatable::text("abcdef").max_length(5), false)]
    #[case(Validatable::number(0.0).required().min(1.0), false)]
    #[case(Validatable::number(1000.0).required().min(1.0).max(1000.0), true)]
    #[case(Validatable::number(1001.0).max(1000.0), false)]
    #[case(Validatable::number(f64::NAN).min(1.0), false)]
    #[case(Validatable::text(""), true)]
    fn validate_returns_expected(#[case] input: Validatable, #[case] expected: bool) {
        assert_eq!(validate(&input), expected);
    }

    #[test]
    fn zero_fails_required_on_its_own() {
        assert_eq!(
            check(&Validatable::number(0.0).required()),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn zero_fails_minimum_on_its_own() {
        assert_eq!(
            check(&Validatable::number(0.0).min(1.0)),
            Err(ValidationError::BelowMinimum {
                min: 1.0,
                actual: 0.0
            })
        );
    }

    #[test]
    fn zero_with_required_and_minimum_reports_both() {
        let error = check(&Validatable::number(0.0).required().min(1.0))
            .expect_err("zero must be rejected");

        assert_eq!(
            error.errors(),
            Some(
                [
                    ValidationError::Required,
                    ValidationError::BelowMinimum {
                        min: 1.0,
                        actual: 0.0
                    },
                ]
                .as_slice()
            )
        );
    }

    #[test]
    fn length_constraints_ignore_numbers() {
        let input = Validatable::number(3.0).min_length(10).max_length(0);
        assert!(validate(&input));
    }

    #[test]
    fn range_constraints_ignore_text() {
        let input = Validatable::text("tiny").min(100.0).max(0.0);
        assert!(validate(&input));
    }

    #[test]
    fn min_length_counts_untrimmed_characters() {
        assert!(rules::validate_min_length(&FieldValue::Text("  ab ".to_owned()), 5).is_ok());
    }

    #[test]
    fn length_is_measured_in_characters() {
        assert!(rules::validate_max_length(&FieldValue::Text("人日人日".to_owned()), 4).is_ok());
    }

    #[test]
    fn constraint_of_zero_still_applies() {
        assert!(!validate(&Validatable::number(-1.0).min(0.0)));
        assert!(!validate(&Validatable::number(1.0).max(0.0)));
        assert!(validate(&Validatable::number(0.0).min(0.0).max(0.0)));
    }
}
