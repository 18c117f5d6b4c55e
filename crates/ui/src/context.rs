use std::sync::Arc;

use services::{AppServices, LeadCaptureService, ReportService};

pub trait UiApp: Send + Sync {
    fn lead_capture(&self) -> Arc<LeadCaptureService>;
    fn reports(&self) -> Arc<ReportService>;
}

impl UiApp for AppServices {
    fn lead_capture(&self) -> Arc<LeadCaptureService> {
        AppServices::lead_capture(self)
    }

    fn reports(&self) -> Arc<ReportService> {
        AppServices::reports(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    lead_capture: Arc<LeadCaptureService>,
    reports: Arc<ReportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lead_capture: app.lead_capture(),
            reports: app.reports(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
