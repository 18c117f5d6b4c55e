#![forbid(unsafe_code)]

pub mod app_services;
pub mod assessment;
pub mod error;
pub mod lead_capture;
pub mod report;

pub use assess_core::Clock;

pub use app_services::{AppServices, ServicesConfig};
pub use assessment::AssessmentSession;
pub use error::{AppServicesError, ReportError, SubmitError};
pub use lead_capture::{DEFAULT_SUBMIT_DELAY, LeadCaptureService};
pub use report::{
    ReportFormatter, ReportPayload, ReportService, TextReportFormatter, report_file_name,
};
