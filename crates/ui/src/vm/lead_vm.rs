use assess_core::model::{Concern, FieldErrors, LeadField, LeadForm};

use crate::views::ViewError;

/// Submission lifecycle of the lead form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
    Failed(ViewError),
}

impl SubmitPhase {
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            SubmitPhase::Submitting => "Submitting...",
            _ => "Get My Comprehensive Report",
        }
    }

    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }
}

/// Editable copy of the form plus inline errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormVm {
    pub form: LeadForm,
    pub errors: FieldErrors,
}

impl LeadFormVm {
    /// Update one text field and drop its stale error.
    pub fn set_field(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.form.name = value,
            LeadField::Company => self.form.company = value,
            LeadField::Email => self.form.email = value,
        }
        self.errors.clear(field);
    }

    /// Empty string clears the optional concern.
    pub fn set_concern(&mut self, raw: &str) {
        self.form.concern = raw.parse::<Concern>().ok();
    }

    #[must_use]
    pub fn error(&self, field: LeadField) -> Option<&'static str> {
        self.errors.get(field)
    }
}
