use serde::{Deserialize, Serialize};

/// Screen of the assessment wizard.
///
/// Progression is strictly linear through [`Step::ORDER`]; there is no way to
/// jump between non-adjacent steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    Welcome,
    Onboarding,
    Questionnaire,
    Results,
    LeadCapture,
}

impl Step {
    /// Fixed transition table.
    pub const ORDER: [Step; 5] = [
        Step::Welcome,
        Step::Onboarding,
        Step::Questionnaire,
        Step::Results,
        Step::LeadCapture,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::Onboarding => 1,
            Step::Questionnaire => 2,
            Step::Results => 3,
            Step::LeadCapture => 4,
        }
    }

    /// 1-based position, for "Step n of 5" style labels.
    #[must_use]
    pub const fn position(self) -> usize {
        self.index() + 1
    }

    /// The following step, or `None` at the end of the flow.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    /// The preceding step, or `None` at the start of the flow.
    #[must_use]
    pub fn previous(self) -> Option<Step> {
        self.index()
            .checked_sub(1)
            .and_then(|idx| Self::ORDER.get(idx).copied())
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Step::Welcome)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Step::LeadCapture)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Onboarding => "Setup Your Assessment",
            Step::Questionnaire => "Cybersecurity Assessment",
            Step::Results => "Your Cybersecurity Assessment Results",
            Step::LeadCapture => "Get Your Full Report",
        }
    }
}
