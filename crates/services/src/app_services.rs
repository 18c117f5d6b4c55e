use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::lead_capture::{DEFAULT_SUBMIT_DELAY, LeadCaptureService};
use crate::report::{ReportService, TextReportFormatter};

/// Knobs resolved by the binary before services are built.
#[derive(Debug, Clone)]
pub struct ServicesConfig {
    pub clock: Clock,
    pub submit_delay: Duration,
    pub reports_dir: PathBuf,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            clock: Clock::System,
            submit_delay: DEFAULT_SUBMIT_DELAY,
            reports_dir: PathBuf::from("."),
        }
    }
}

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    lead_capture: Arc<LeadCaptureService>,
    reports: Arc<ReportService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, config: ServicesConfig) -> Self {
        let lead_capture = Arc::new(LeadCaptureService::new(
            config.clock,
            config.submit_delay,
            Arc::clone(&storage.documents),
        ));
        let reports = Arc::new(ReportService::new(
            config.clock,
            Arc::new(TextReportFormatter),
            config.reports_dir,
        ));
        Self {
            lead_capture,
            reports,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: ServicesConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, config))
    }

    #[must_use]
    pub fn in_memory(config: ServicesConfig) -> Self {
        Self::new(&Storage::in_memory(), config)
    }

    #[must_use]
    pub fn lead_capture(&self) -> Arc<LeadCaptureService> {
        Arc::clone(&self.lead_capture)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }
}
