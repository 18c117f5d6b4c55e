use std::path::PathBuf;
use std::sync::Arc;

use assess_core::model::AssessmentState;

use super::formatter::ReportFormatter;
use super::payload::{ReportPayload, report_file_name};
use crate::Clock;
use crate::error::ReportError;

/// Writes rendered reports into a fixed output directory.
#[derive(Clone)]
pub struct ReportService {
    clock: Clock,
    formatter: Arc<dyn ReportFormatter>,
    output_dir: PathBuf,
}

impl ReportService {
    #[must_use]
    pub fn new(clock: Clock, formatter: Arc<dyn ReportFormatter>, output_dir: PathBuf) -> Self {
        Self {
            clock,
            formatter,
            output_dir,
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &std::path::Path {
        &self.output_dir
    }

    /// Render `state` and return the file name it should be saved under.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the formatter fails.
    pub fn render(&self, state: &AssessmentState) -> Result<(String, Vec<u8>), ReportError> {
        let payload = ReportPayload::from_state(state, self.clock);
        let bytes = self.formatter.format(&payload)?;
        let name = report_file_name(&payload.company, payload.date(), self.formatter.extension());
        Ok((name, bytes))
    }

    /// Render `state` and write it into the output directory.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if rendering fails or the file cannot be written.
    pub async fn export(&self, state: &AssessmentState) -> Result<PathBuf, ReportError> {
        let (name, bytes) = self.render(state)?;
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(name);
        tokio::fs::write(&path, &bytes).await?;
        tracing::info!(
            path = %path.display(),
            media_type = self.formatter.media_type(),
            bytes = bytes.len(),
            "report exported"
        );
        Ok(path)
    }
}
