use std::collections::BTreeSet;

use assess_core::catalog::{Question, QuestionBank};
use assess_core::model::{Action, AssessmentState, FrameworkId, reduce};
use assess_core::progress::{self, ProgressReport};
use assess_core::recommend::recommend_frameworks;
use assess_core::scoring::{self, Comparison};
use storage::repository::AssessmentDocument;

/// Owns the assessment state and funnels every mutation through [`reduce`].
///
/// One session per wizard; views receive it through context rather than a
/// process-wide global.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: &'static QuestionBank,
    state: AssessmentState,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    /// Fresh session over the built-in question catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bank(QuestionBank::builtin())
    }

    #[must_use]
    pub fn with_bank(bank: &'static QuestionBank) -> Self {
        Self {
            bank,
            state: AssessmentState::initial(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    #[must_use]
    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), step = ?self.state.step(), "dispatch");
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }

    /// Questions for the selected frameworks, in catalog order.
    #[must_use]
    pub fn active_questions(&self) -> Vec<&'static Question> {
        progress::active_questions(self.bank, self.state.selected_frameworks())
    }

    #[must_use]
    pub fn progress(&self) -> ProgressReport {
        progress::progress(&self.active_questions(), self.state.answers())
    }

    /// Suggested frameworks for the current country and industry.
    #[must_use]
    pub fn recommended_frameworks(&self) -> BTreeSet<FrameworkId> {
        recommend_frameworks(self.state.country(), self.state.industry())
    }

    /// Compute per-framework scores and attach the benchmark table.
    pub fn finalize_scores(&mut self) {
        let scores = scoring::framework_scores(
            &self.active_questions(),
            self.state.selected_frameworks(),
            self.state.answers(),
        );
        self.dispatch(Action::CalculateScores(scores));
        self.dispatch(Action::SetBenchmarks(scoring::benchmark_map()));
    }

    #[must_use]
    pub fn overall_score(&self) -> u8 {
        scoring::overall_score(self.state.scores())
    }

    #[must_use]
    pub fn comparisons(&self) -> Vec<Comparison> {
        scoring::compare(self.state.scores(), self.state.benchmarks())
    }

    /// Replace the in-memory state with a previously saved document.
    pub fn restore(&mut self, document: AssessmentDocument) {
        tracing::debug!(completed_at = %document.completed_at, "restoring saved assessment");
        self.state = document.state;
    }
}
