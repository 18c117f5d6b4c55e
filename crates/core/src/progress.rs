use std::collections::BTreeSet;

use crate::catalog::{Category, Question, QuestionBank};
use crate::model::{AnswerMap, FrameworkId};

/// Aggregated view of questionnaire progress, useful for UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub answered: usize,
}

impl Tally {
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }

    /// Whole-number percentage; 0 when there is nothing to answer.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = self.answered.min(self.total) * 100 / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgress {
    pub category: Category,
    pub tally: Tally,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub overall: Tally,
    /// One entry per category, in [`Category::ALL`] order, including empty ones.
    pub per_category: Vec<CategoryProgress>,
}

/// Questions belonging to the selected frameworks, in catalog order.
#[must_use]
pub fn active_questions<'a>(
    bank: &'a QuestionBank,
    selected: &BTreeSet<FrameworkId>,
) -> Vec<&'a Question> {
    bank.questions()
        .iter()
        .filter(|q| selected.contains(&q.framework))
        .collect()
}

/// Count answered questions overall and per category.
///
/// A question counts as answered when its id is present in `answers`,
/// including level 0.
#[must_use]
pub fn progress(questions: &[&Question], answers: &AnswerMap) -> ProgressReport {
    let tally_of = |filter: &dyn Fn(&Question) -> bool| {
        questions
            .iter()
            .copied()
            .filter(|q| filter(q))
            .fold(Tally::default(), |mut tally, q| {
                tally.total += 1;
                if answers.contains_key(&q.id) {
                    tally.answered += 1;
                }
                tally
            })
    };

    let per_category = Category::ALL
        .into_iter()
        .map(|category| CategoryProgress {
            category,
            tally: tally_of(&|q: &Question| q.category == category),
        })
        .collect();

    ProgressReport {
        overall: tally_of(&|_: &Question| true),
        per_category,
    }
}
