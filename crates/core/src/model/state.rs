use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::ids::{FrameworkId, QuestionId};
use super::lead::{LeadData, LeadPatch};
use super::maturity::MaturityLevel;
use super::profile::{Country, Industry};
use super::step::Step;

/// Percentage (0..=100) per framework; used for both scores and benchmarks.
pub type ScoreMap = BTreeMap<FrameworkId, u8>;

/// Recorded maturity level per question. A missing key means "unanswered".
pub type AnswerMap = BTreeMap<QuestionId, MaturityLevel>;

/// The single aggregate the wizard revolves around.
///
/// Only [`reduce`] produces new states; every other view of the assessment
/// (active questions, progress, scores) is derived from this value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentState {
    current_step: Step,
    country: Option<Country>,
    industry: Option<Industry>,
    selected_frameworks: BTreeSet<FrameworkId>,
    answers: AnswerMap,
    scores: ScoreMap,
    benchmarks: ScoreMap,
    lead_data: LeadData,
}

/// Named transitions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCountry(Country),
    SetIndustry(Industry),
    SetFrameworks(BTreeSet<FrameworkId>),
    SetAnswer {
        question: QuestionId,
        level: MaturityLevel,
    },
    CalculateScores(ScoreMap),
    SetBenchmarks(ScoreMap),
    SetLeadData(LeadPatch),
    NextStep,
    PreviousStep,
    ResetAssessment,
}

impl Action {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::SetCountry(_) => "SET_COUNTRY",
            Action::SetIndustry(_) => "SET_INDUSTRY",
            Action::SetFrameworks(_) => "SET_FRAMEWORKS",
            Action::SetAnswer { .. } => "SET_ANSWER",
            Action::CalculateScores(_) => "CALCULATE_SCORES",
            Action::SetBenchmarks(_) => "SET_BENCHMARKS",
            Action::SetLeadData(_) => "SET_LEAD_DATA",
            Action::NextStep => "NEXT_STEP",
            Action::PreviousStep => "PREVIOUS_STEP",
            Action::ResetAssessment => "RESET_ASSESSMENT",
        }
    }
}

impl AssessmentState {
    /// Fresh state: welcome screen, nothing selected or answered.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.current_step
    }

    #[must_use]
    pub fn country(&self) -> Option<Country> {
        self.country
    }

    #[must_use]
    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    #[must_use]
    pub fn selected_frameworks(&self) -> &BTreeSet<FrameworkId> {
        &self.selected_frameworks
    }

    #[must_use]
    pub fn is_selected(&self, framework: FrameworkId) -> bool {
        self.selected_frameworks.contains(&framework)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, question: &QuestionId) -> Option<MaturityLevel> {
        self.answers.get(question).copied()
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreMap {
        &self.scores
    }

    #[must_use]
    pub fn benchmarks(&self) -> &ScoreMap {
        &self.benchmarks
    }

    #[must_use]
    pub fn lead_data(&self) -> &LeadData {
        &self.lead_data
    }
}

/// Apply one action. Total and side-effect free.
#[must_use]
pub fn reduce(mut state: AssessmentState, action: Action) -> AssessmentState {
    match action {
        Action::SetCountry(country) => state.country = Some(country),
        Action::SetIndustry(industry) => state.industry = Some(industry),
        Action::SetFrameworks(frameworks) => state.selected_frameworks = frameworks,
        Action::SetAnswer { question, level } => {
            state.answers.insert(question, level);
        }
        Action::CalculateScores(scores) => state.scores = scores,
        Action::SetBenchmarks(benchmarks) => state.benchmarks = benchmarks,
        Action::SetLeadData(patch) => {
            state.lead_data = std::mem::take(&mut state.lead_data).merged(patch);
        }
        Action::NextStep => {
            if let Some(next) = state.current_step.next() {
                state.current_step = next;
            }
        }
        Action::PreviousStep => {
            if let Some(previous) = state.current_step.previous() {
                state.current_step = previous;
            }
        }
        Action::ResetAssessment => return AssessmentState::initial(),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(raw: u8) -> MaturityLevel {
        MaturityLevel::new(raw).unwrap()
    }

    fn walk(state: AssessmentState, actions: &[Action]) -> AssessmentState {
        actions
            .iter()
            .cloned()
            .fold(state, reduce)
    }

    #[test]
    fn navigation_never_leaves_the_step_table() {
        let mut state = AssessmentState::initial();
        state = reduce(state, Action::PreviousStep);
        assert_eq!(state.step(), Step::Welcome);

        for _ in 0..10 {
            state = reduce(state, Action::NextStep);
        }
        assert_eq!(state.step(), Step::LeadCapture);

        state = reduce(state, Action::PreviousStep);
        assert_eq!(state.step(), Step::Results);
    }

    #[test]
    fn set_answer_upserts_every_level() {
        let question = QuestionId::new("iso-27001-isms");
        let mut state = AssessmentState::initial();
        for level in MaturityLevel::ALL {
            state = reduce(
                state,
                Action::SetAnswer {
                    question: question.clone(),
                    level,
                },
            );
            assert_eq!(state.answer(&question), Some(level));
            assert_eq!(state.answers().len(), 1);
        }
    }

    #[test]
    fn lead_data_is_shallow_merged() {
        let state = walk(
            AssessmentState::initial(),
            &[
                Action::SetLeadData(LeadPatch {
                    name: Some("Dana".into()),
                    ..LeadPatch::default()
                }),
                Action::SetLeadData(LeadPatch {
                    company: Some("Acme".into()),
                    ..LeadPatch::default()
                }),
            ],
        );
        assert_eq!(state.lead_data().name, "Dana");
        assert_eq!(state.lead_data().company, "Acme");
    }

    #[test]
    fn reset_restores_initial_state_from_anywhere() {
        let state = walk(
            AssessmentState::initial(),
            &[
                Action::NextStep,
                Action::SetCountry(Country::Qatar),
                Action::SetIndustry(Industry::Retail),
                Action::SetFrameworks([FrameworkId::PciDss].into_iter().collect()),
                Action::SetAnswer {
                    question: QuestionId::new("pci-dss-network-security"),
                    level: level(2),
                },
                Action::CalculateScores([(FrameworkId::PciDss, 50)].into_iter().collect()),
                Action::NextStep,
                Action::NextStep,
            ],
        );
        assert_ne!(state, AssessmentState::initial());

        let reset = reduce(state, Action::ResetAssessment);
        assert_eq!(reset, AssessmentState::initial());
    }

    #[test]
    fn set_frameworks_replaces_selection() {
        let state = walk(
            AssessmentState::initial(),
            &[
                Action::SetFrameworks(
                    [FrameworkId::Gdpr, FrameworkId::Sama].into_iter().collect(),
                ),
                Action::SetFrameworks([FrameworkId::Pdpl].into_iter().collect()),
            ],
        );
        assert_eq!(state.selected_frameworks().len(), 1);
        assert!(state.is_selected(FrameworkId::Pdpl));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(AssessmentState::initial()).unwrap();
        assert_eq!(json["currentStep"], "welcome");
        assert!(json["selectedFrameworks"].as_array().unwrap().is_empty());
        assert!(json.get("leadData").is_some());
    }
}
