use std::sync::Arc;
use std::time::Duration;

use assess_core::model::{Action, AssessmentState, LeadForm, LeadPatch};
use storage::repository::{
    ASSESSMENT_DOCUMENT_KEY, AssessmentDocument, AssessmentRepository, StorageError,
};

use crate::Clock;
use crate::assessment::AssessmentSession;
use crate::error::SubmitError;

/// Pause that stands in for the lead submission round trip.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Validates lead details and stores the completed assessment.
#[derive(Clone)]
pub struct LeadCaptureService {
    clock: Clock,
    delay: Duration,
    documents: Arc<dyn AssessmentRepository>,
}

impl LeadCaptureService {
    #[must_use]
    pub fn new(clock: Clock, delay: Duration, documents: Arc<dyn AssessmentRepository>) -> Self {
        Self {
            clock,
            delay,
            documents,
        }
    }

    /// Validate `form` and record it on the session.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Validation` with every failing field; the session
    /// is left untouched in that case.
    pub fn accept(
        &self,
        session: &mut AssessmentSession,
        form: &LeadForm,
    ) -> Result<(), SubmitError> {
        let lead = form.validate()?;
        session.dispatch(Action::SetLeadData(LeadPatch::replace_all(lead)));
        Ok(())
    }

    /// Wait out the submission delay, then persist `state` as completed now.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Storage` if the document cannot be saved.
    pub async fn complete(&self, state: AssessmentState) -> Result<AssessmentDocument, SubmitError> {
        tokio::time::sleep(self.delay).await;

        let document = AssessmentDocument::new(state, self.clock.now());
        if let Err(err) = self
            .documents
            .save_document(ASSESSMENT_DOCUMENT_KEY, &document)
            .await
        {
            tracing::warn!(error = %err, "failed to persist assessment");
            return Err(err.into());
        }

        tracing::info!(
            company = %document.state.lead_data().company,
            frameworks = document.state.selected_frameworks().len(),
            "assessment submitted"
        );
        Ok(document)
    }

    /// Validate, record and persist in one step.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Validation` for bad input or `SubmitError::Storage`
    /// when persistence fails.
    pub async fn submit(
        &self,
        session: &mut AssessmentSession,
        form: &LeadForm,
    ) -> Result<AssessmentDocument, SubmitError> {
        self.accept(session, form)?;
        self.complete(session.state().clone()).await
    }

    /// Read back the last stored assessment, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backend, decoding or version failures.
    pub async fn load_saved(&self) -> Result<Option<AssessmentDocument>, StorageError> {
        self.documents.load_document(ASSESSMENT_DOCUMENT_KEY).await
    }
}
