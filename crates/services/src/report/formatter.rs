use std::fmt::Write as _;

use assess_core::scoring::{ScoreBand, domain_breakdown};

use super::payload::ReportPayload;
use crate::error::ReportError;

/// Renders a [`ReportPayload`] into a downloadable artifact.
pub trait ReportFormatter: Send + Sync {
    /// # Errors
    ///
    /// Returns `ReportError` if the payload cannot be rendered.
    fn format(&self, payload: &ReportPayload) -> Result<Vec<u8>, ReportError>;

    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    fn media_type(&self) -> &'static str;
}

/// Plain-text report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportFormatter;

const ROADMAP: &str = "\
Recommended Roadmap
-------------------
Quick Wins (0-3 months):
- Implement Multi-Factor Authentication (MFA) across all critical systems
- Conduct security awareness training for all employees
- Document and formalize cybersecurity policies and procedures
- Implement basic network segmentation

Short Term (3-6 months):
- Conduct comprehensive penetration testing
- Implement data classification system
- Perform vendor risk assessments
- Enhance monitoring and logging capabilities

Medium Term (6-12 months):
- Deploy Security Operations Center (SOC) capabilities
- Implement SIEM solution for advanced threat detection
- Conduct framework-specific gap assessments
- Test and improve incident response procedures

Strategic (12+ months):
- Pursue ISO 27001 certification
- Mature privacy program and compliance frameworks
- Implement continuous improvement processes
- Consider advanced threat protection solutions

Next Steps & Our Support
------------------------
1. Review this report with your security team
2. Prioritize recommendations based on risk and resources
3. Develop implementation timeline and budget
4. Contact our cybersecurity experts for consultation
5. Schedule regular follow-up assessments

Contact Information
-------------------
For questions or to schedule a consultation:
Email: security@example.com
Phone: +1 (555) 123-4567
";

impl TextReportFormatter {
    fn render(payload: &ReportPayload) -> Result<String, std::fmt::Error> {
        let mut out = String::with_capacity(4096);

        writeln!(out, "CYBERSECURITY ASSESSMENT REPORT")?;
        writeln!(out, "===============================")?;
        writeln!(out)?;
        writeln!(out, "Executive Summary")?;
        writeln!(out, "-----------------")?;
        writeln!(out, "Company: {}", payload.company)?;
        writeln!(out, "Contact: {} ({})", payload.name, payload.email)?;
        writeln!(out, "Industry: {}", payload.industry)?;
        writeln!(out, "Country: {}", payload.country)?;
        writeln!(out, "Assessment Date: {}", payload.assessment_date)?;
        writeln!(out)?;
        writeln!(out, "Overall Security Score: {}/100", payload.overall_score)?;
        writeln!(
            out,
            "Risk Level: {}",
            ScoreBand::from_score(payload.overall_score).label()
        )?;
        writeln!(out)?;

        writeln!(out, "Assessment Scope")?;
        writeln!(out, "----------------")?;
        writeln!(out, "Frameworks Assessed:")?;
        for framework in &payload.frameworks {
            writeln!(out, "- {}", framework.label())?;
        }
        writeln!(out)?;

        writeln!(out, "Results Overview")?;
        writeln!(out, "----------------")?;
        writeln!(out, "Framework Scores:")?;
        for (framework, score) in &payload.scores {
            match payload.benchmarks.get(framework).copied().filter(|b| *b > 0) {
                Some(avg) => writeln!(
                    out,
                    "- {}: {score}/100 (Industry Avg: {avg})",
                    framework.label()
                )?,
                None => writeln!(
                    out,
                    "- {}: {score}/100 (Industry Avg: N/A)",
                    framework.label()
                )?,
            }
        }
        writeln!(out)?;

        writeln!(out, "Domain Breakdown")?;
        writeln!(out, "----------------")?;
        for (category, value) in domain_breakdown(payload.overall_score) {
            writeln!(out, "{category}: {value}/100")?;
        }
        writeln!(out)?;

        writeln!(out, "{ROADMAP}")?;

        writeln!(out, "Confidentiality Notice")?;
        writeln!(out, "----------------------")?;
        writeln!(
            out,
            "This report contains confidential information intended solely for the use of {}.",
            payload.company
        )?;
        writeln!(out, "Unauthorized distribution is strictly prohibited.")?;
        writeln!(out)?;
        writeln!(
            out,
            "Generated on: {}",
            payload.generated_at.format("%m/%d/%Y, %H:%M:%S UTC")
        )?;

        Ok(out)
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, payload: &ReportPayload) -> Result<Vec<u8>, ReportError> {
        Ok(Self::render(payload)?.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn media_type(&self) -> &'static str {
        "text/plain"
    }
}
