//! Per-session form state: raw values, derived errors and submit status.

use std::collections::HashMap;

use crate::error::{Result, ValidationErrors};
use crate::form::{find_field, validate_fields, FormFieldDef};

/// When field edits trigger validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevalidateMode {
    /// Edits validate the edited field once a submit has been attempted.
    #[default]
    AfterFirstSubmit,
    /// Every edit validates the edited field.
    OnChange,
}

impl RevalidateMode {
    fn validates_edit(self, submit_attempts: usize) -> bool {
        match self {
            Self::AfterFirstSubmit => submit_attempts > 0,
            Self::OnChange => true,
        }
    }
}

/// Mutable state of one form for the duration of a session.
///
/// `errors` is only ever written by validation passes over the current
/// values, so it never keeps a message for a field that now passes.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    errors: ValidationErrors,
    mode: RevalidateMode,
    submit_attempts: usize,
    submitted: bool,
}

impl FormState {
    /// Creates an empty state that revalidates after the first submit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state with an explicit revalidation mode.
    pub fn with_mode(mode: RevalidateMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Returns the current raw value of `field`, or `""` if never set.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Returns all raw values.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Returns the current errors.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns whether the last submit attempt succeeded.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Returns how many submit attempts were made.
    pub fn submit_attempts(&self) -> usize {
        self.submit_attempts
    }

    /// The submit control is disabled exactly when errors are present.
    pub fn is_submit_disabled(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Records a raw value for `name`, revalidating that field if the
    /// revalidation mode calls for it.
    pub fn set_value(
        &mut self,
        fields: &[FormFieldDef],
        name: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let field = find_field(fields, name)?;
        self.values.insert(field.name.clone(), value.into());
        self.submitted = false;

        if self.mode.validates_edit(self.submit_attempts) {
            let message = field.validate(self.value(name));
            self.errors.set(name, message);
        }

        Ok(())
    }

    /// Runs a full validation pass and counts it as a submit attempt.
    ///
    /// Returns the fresh errors; `submitted` is set when there are none.
    pub fn submit(&mut self, fields: &[FormFieldDef]) -> &ValidationErrors {
        let errors = validate_fields(fields, &self.values);
        self.record_submit(errors)
    }

    /// Records the outcome of a submit attempt whose validation pass was
    /// run elsewhere over [`values`](Self::values).
    pub fn record_submit(&mut self, errors: ValidationErrors) -> &ValidationErrors {
        self.submit_attempts += 1;
        self.submitted = errors.is_empty();
        self.errors = errors;
        &self.errors
    }

    /// Clears values, errors and submit status.
    pub fn reset(&mut self) {
        *self = Self::with_mode(self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormBuilder;
    use crate::validation::RequiredValidator;
    use crate::widgets::BootstrapTextInput;

    fn fields() -> Vec<FormFieldDef> {
        FormBuilder::new()
            .field(
                FormFieldDef::new("name", "Name", BootstrapTextInput::new())
                    .required()
                    .validator(RequiredValidator::with_message("Name is required")),
            )
            .build()
    }

    #[test]
    fn test_edits_before_submit_do_not_validate() {
        let fields = fields();
        let mut state = FormState::new();
        state.set_value(&fields, "name", "").unwrap();
        assert!(state.errors().is_empty());
        assert!(!state.is_submit_disabled());
    }

    #[test]
    fn test_failed_submit_then_fix_clears_error() {
        let fields = fields();
        let mut state = FormState::new();

        assert_eq!(state.submit(&fields).get("name"), Some("Name is required"));
        assert!(state.is_submit_disabled());
        assert!(!state.is_submitted());

        state.set_value(&fields, "name", "Ada").unwrap();
        assert!(state.errors().is_empty());
        assert!(!state.is_submit_disabled());

        assert!(state.submit(&fields).is_empty());
        assert!(state.is_submitted());
        assert_eq!(state.submit_attempts(), 2);
    }

    #[test]
    fn test_on_change_mode_validates_every_edit() {
        let fields = fields();
        let mut state = FormState::with_mode(RevalidateMode::OnChange);
        state.set_value(&fields, "name", "  ").unwrap();
        assert_eq!(state.errors().get("name"), Some("Name is required"));
        assert!(state.is_submit_disabled());
        assert_eq!(state.submit_attempts(), 0);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let fields = fields();
        let mut state = FormState::new();
        assert!(state.set_value(&fields, "phone", "123").is_err());
        assert!(state.values().is_empty());
    }

    #[test]
    fn test_reset_keeps_mode() {
        let fields = fields();
        let mut state = FormState::with_mode(RevalidateMode::OnChange);
        state.set_value(&fields, "name", "Ada").unwrap();
        state.submit(&fields);
        state.reset();
        assert_eq!(state.value("name"), "");
        assert_eq!(state.submit_attempts(), 0);
        assert!(!state.is_submitted());
        assert_eq!(state.mode, RevalidateMode::OnChange);
    }
}
