mod lead_vm;
mod onboarding_vm;
mod questionnaire_vm;
mod results_vm;

pub use lead_vm::{LeadFormVm, SubmitPhase};
pub use onboarding_vm::{OnboardingOutcome, OnboardingStep, OnboardingVm, SelectionSummary};
pub use questionnaire_vm::{ENCOURAGEMENT, QuestionnaireOutcome, QuestionnaireVm};
pub use results_vm::{ComparisonRowVm, DomainRowVm, ROADMAP, ResultsVm, RoadmapPhase, map_results};
