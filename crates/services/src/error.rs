//! Shared error types for the services crate.

use thiserror::Error;

use assess_core::model::FieldErrors;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `LeadCaptureService`.
///
/// Validation failures are the user's to fix; storage failures are not.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("lead form is invalid: {0}")]
    Validation(FieldErrors),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SubmitError {
    /// Field errors to show inline, if this is a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for SubmitError {
    fn from(errors: FieldErrors) -> Self {
        SubmitError::Validation(errors)
    }
}

/// Errors emitted while rendering or writing a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("report rendering failed")]
    Format(#[from] std::fmt::Error),
    #[error("report could not be written: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
