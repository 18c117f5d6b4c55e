//! Report assembly, formatting and export.

mod export;
mod formatter;
mod payload;

pub use export::ReportService;
pub use formatter::{ReportFormatter, TextReportFormatter};
pub use payload::{ReportPayload, report_file_name};
