use chrono::{DateTime, NaiveDate, Utc};

use assess_core::model::{AssessmentState, FrameworkId, ScoreMap};
use assess_core::scoring;

use crate::Clock;

const FALLBACK_NAME: &str = "User";
const FALLBACK_COMPANY: &str = "Company";
const FALLBACK_EMAIL: &str = "user@example.com";
const UNSPECIFIED: &str = "Not specified";

/// Flat record handed to a [`ReportFormatter`](super::ReportFormatter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    pub name: String,
    pub company: String,
    pub email: String,
    pub country: String,
    pub industry: String,
    /// Selected frameworks in catalog order.
    pub frameworks: Vec<FrameworkId>,
    pub scores: ScoreMap,
    pub benchmarks: ScoreMap,
    pub overall_score: u8,
    /// Display date, `MM/DD/YYYY`.
    pub assessment_date: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportPayload {
    /// Snapshot `state` for reporting. Blank lead fields fall back to placeholders.
    #[must_use]
    pub fn from_state(state: &AssessmentState, clock: Clock) -> Self {
        let lead = state.lead_data();
        let or = |value: &str, fallback: &str| {
            if value.trim().is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        let now = clock.now();

        Self {
            name: or(&lead.name, FALLBACK_NAME),
            company: or(&lead.company, FALLBACK_COMPANY),
            email: or(&lead.email, FALLBACK_EMAIL),
            country: state
                .country()
                .map_or_else(|| UNSPECIFIED.to_string(), |c| c.to_string()),
            industry: state
                .industry()
                .map_or_else(|| UNSPECIFIED.to_string(), |i| i.to_string()),
            frameworks: FrameworkId::ALL
                .into_iter()
                .filter(|f| state.is_selected(*f))
                .collect(),
            scores: state.scores().clone(),
            benchmarks: state.benchmarks().clone(),
            overall_score: scoring::overall_score(state.scores()),
            assessment_date: now.format("%m/%d/%Y").to_string(),
            generated_at: now,
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.generated_at.date_naive()
    }
}

/// `cybersecurity-assessment-<company>-<YYYY-MM-DD>.<ext>`.
///
/// Path separators in the company name become `-` so the result is always a
/// single file name.
#[must_use]
pub fn report_file_name(company: &str, date: NaiveDate, extension: &str) -> String {
    let company: String = company
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!(
        "cybersecurity-assessment-{company}-{}.{extension}",
        date.format("%Y-%m-%d")
    )
}
