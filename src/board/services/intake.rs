//! Form intake: validates raw input before anything reaches the store.

use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::{
    board::{
        domain::{Effort, NewWorkItem, WorkItem},
        ports::{ItemIdSource, Notice},
    },
    config::IntakeConfig,
    validation::{self, FieldValue, Validatable, ValidationError},
};

use super::ItemStore;

/// Notice shown when submitted input is rejected.
pub const REJECTION_NOTICE: &str = "Wrong value entered...";

/// Raw text of the new-item form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemForm {
    /// Title field.
    pub title: String,
    /// Description field.
    pub description: String,
    /// Effort field, in person-days; fractions and exponents are accepted.
    pub effort: String,
}

impl NewItemForm {
    /// Fills the three form fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        effort: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            effort: effort.into(),
        }
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.effort.clear();
    }

    /// Returns `true` when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.effort.is_empty()
    }
}

/// Errors returned by [`ItemIntake::submit`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeError {
    /// One or more fields failed validation; the store was not touched.
    #[error("rejected input: {0}")]
    Rejected(#[from] ValidationError),
}

/// Validates submitted forms and hands accepted ones to the store.
#[derive(Debug, Clone)]
pub struct ItemIntake<N>
where
    N: Notice,
{
    rules: IntakeConfig,
    notice: N,
}

impl<N> ItemIntake<N>
where
    N: Notice,
{
    /// Creates an intake applying `rules` and reporting through `notice`.
    #[must_use]
    pub const fn new(rules: IntakeConfig, notice: N) -> Self {
        Self { rules, notice }
    }

    /// Returns the applied rules.
    #[must_use]
    pub const fn rules(&self) -> &IntakeConfig {
        &self.rules
    }

    /// Validates `form` and converts it into creation fields.
    ///
    /// # Errors
    ///
    /// Returns the field-attributed [`ValidationError`]s of every rejected
    /// field.
    pub fn gather(&self, form: &NewItemForm) -> Result<NewWorkItem, ValidationError> {
        let effort_value = form
            .effort
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|days| days.is_finite())
            .unwrap_or(f64::NAN);

        let fields = [
            ("title", Validatable::text(form.title.as_str()).required()),
            (
                "description",
                Validatable::text(form.description.as_str())
                    .required()
                    .min_length(self.rules.description_min_length),
            ),
            (
                "effort",
                Validatable::new(FieldValue::Number(effort_value))
                    .required()
                    .min(f64::from(self.rules.effort_min))
                    .max(f64::from(self.rules.effort_max)),
            ),
        ];
        let errors = fields
            .into_iter()
            .filter_map(|(name, input)| {
                validation::check(&input)
                    .err()
                    .map(|error| ValidationError::for_field(name, error))
            })
            .collect();
        ValidationError::collect(errors)?;

        let effort = Effort::from_fractional_days(effort_value).ok_or_else(|| {
            ValidationError::for_field(
                "effort",
                ValidationError::AboveMaximum {
                    max: f64::from(self.rules.effort_max),
                    actual: effort_value,
                },
            )
        })?;
        Ok(NewWorkItem::new(
            form.title.as_str(),
            form.description.as_str(),
            effort,
        ))
    }

    /// Handles a form submission.
    ///
    /// Accepted input is added to `store` and the form is cleared. Rejected
    /// input raises a blocking notice and leaves both store and form as
    /// they were.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Rejected`] when any field fails validation.
    pub fn submit<I, C>(
        &self,
        form: &mut NewItemForm,
        store: &mut ItemStore<I, C>,
    ) -> Result<WorkItem, IntakeError>
    where
        I: ItemIdSource,
        C: Clock + Send + Sync,
    {
        let fields = match self.gather(form) {
            Ok(fields) => fields,
            Err(error) => {
                info!(%error, "new item rejected");
                self.notice.alert(REJECTION_NOTICE);
                return Err(IntakeError::Rejected(error));
            }
        };

        let item = store.add(fields.title, fields.description, fields.effort);
        form.clear();
        Ok(item)
    }
}
