//! Submission form state for the start view.
//!
//! Holds the raw field values, which field has focus, and the validation
//! errors from the last rejected submit. Editing a field clears its error.

use crate::review::{RequestField, ReviewMode, ReviewRequest, ValidationResult};

/// Values the form starts with, taken from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDefaults {
    /// Initial review mode.
    pub mode: ReviewMode,
    /// Initial pull request URL.
    pub pr_url: String,
    /// Initial credential.
    pub credential: String,
}

/// Editable form fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    /// Pull request URL input.
    #[default]
    PrUrl,
    /// Credential input, shown only in private mode.
    Credential,
}

impl From<FormField> for RequestField {
    fn from(field: FormField) -> Self {
        match field {
            FormField::PrUrl => Self::PrUrl,
            FormField::Credential => Self::Credential,
        }
    }
}

/// Editable state of the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    mode: ReviewMode,
    pr_url: String,
    credential: String,
    focus: FormField,
    errors: ValidationResult,
}

impl FormState {
    /// Creates a form pre-filled from `defaults` with the URL focused.
    #[must_use]
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            mode: defaults.mode,
            pr_url: defaults.pr_url.clone(),
            credential: defaults.credential.clone(),
            focus: FormField::PrUrl,
            errors: ValidationResult::default(),
        }
    }

    /// Selected review mode.
    #[must_use]
    pub const fn mode(&self) -> ReviewMode {
        self.mode
    }

    /// Current pull request URL text.
    #[must_use]
    pub const fn pr_url(&self) -> &str {
        self.pr_url.as_str()
    }

    /// Current credential text.
    #[must_use]
    pub const fn credential(&self) -> &str {
        self.credential.as_str()
    }

    /// Field that receives typed characters.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Errors from the last rejected submit.
    #[must_use]
    pub const fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Error shown beneath `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.error_for(field.into())
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, ch: char) {
        self.focused_value_mut().push(ch);
        self.clear_focused_error();
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.focused_value_mut().pop().is_some() {
            self.clear_focused_error();
        }
    }

    /// Empties the focused field.
    pub fn clear_field(&mut self) {
        self.focused_value_mut().clear();
        self.clear_focused_error();
    }

    /// Moves focus to the next visible field, wrapping around.
    pub const fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::PrUrl if self.mode.requires_credential() => FormField::Credential,
            FormField::PrUrl | FormField::Credential => FormField::PrUrl,
        };
    }

    /// Switches between public and private mode.
    ///
    /// Leaving private mode hides the credential field, so focus returns to
    /// the URL and any credential error is dropped. The typed credential is
    /// kept in case the user switches back.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if !self.mode.requires_credential() {
            self.focus = FormField::PrUrl;
            self.remove_error(FormField::Credential);
        }
    }

    /// Builds the request described by the current field values.
    #[must_use]
    pub fn to_request(&self) -> ReviewRequest {
        ReviewRequest::new(self.mode, self.pr_url.clone(), self.credential.clone())
    }

    /// Replaces the field errors with a validation outcome.
    pub fn set_errors(&mut self, errors: ValidationResult) {
        self.errors = errors;
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::PrUrl => &mut self.pr_url,
            FormField::Credential => &mut self.credential,
        }
    }

    fn clear_focused_error(&mut self) {
        self.remove_error(self.focus);
    }

    fn remove_error(&mut self, field: FormField) {
        self.errors.clear(field.into());
    }
}
