/// Shown briefly when progress crosses a quarter mark.
pub const ENCOURAGEMENT: &str = "Great progress, keep going!";

const MILESTONES: [usize; 3] = [25, 50, 75];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionnaireOutcome {
    Moved,
    /// Next was pressed on the last question.
    Finished,
    /// Back was pressed on the first question.
    Left,
}

/// Cursor over the active question list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionnaireVm {
    index: usize,
    total: usize,
}

impl QuestionnaireVm {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.index + 1, self.total)
    }

    /// Position-based percentage (the current question counts as reached).
    #[must_use]
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.index + 1) * 100 / self.total
    }

    /// True when the current position sits just past a quarter mark.
    #[must_use]
    pub fn at_milestone(&self) -> bool {
        if self.total == 0 {
            return false;
        }
        let hundredths = (self.index + 1) * 10_000 / self.total;
        MILESTONES
            .iter()
            .any(|m| hundredths > m * 100 && hundredths <= (m + 1) * 100)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.total {
            self.index = index;
        }
    }

    pub fn next(&mut self) -> QuestionnaireOutcome {
        if self.is_last() {
            return QuestionnaireOutcome::Finished;
        }
        self.index += 1;
        QuestionnaireOutcome::Moved
    }

    pub fn back(&mut self) -> QuestionnaireOutcome {
        if self.index == 0 {
            return QuestionnaireOutcome::Left;
        }
        self.index -= 1;
        QuestionnaireOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_finishes_on_last_question() {
        let mut vm = QuestionnaireVm::new(2);
        assert_eq!(vm.position_label(), "Question 1 of 2");
        assert_eq!(vm.next(), QuestionnaireOutcome::Moved);
        assert_eq!(vm.next(), QuestionnaireOutcome::Finished);
        assert_eq!(vm.index(), 1);
    }

    #[test]
    fn back_leaves_from_first_question() {
        let mut vm = QuestionnaireVm::new(3);
        assert_eq!(vm.back(), QuestionnaireOutcome::Left);
        vm.go_to(2);
        assert_eq!(vm.back(), QuestionnaireOutcome::Moved);
        assert_eq!(vm.index(), 1);
        vm.go_to(10);
        assert_eq!(vm.index(), 1);
    }

    #[test]
    fn milestones_fire_just_past_quarters() {
        // 63 questions: position 17 is 26.98%, 16 is 25.39%.
        let mut vm = QuestionnaireVm::new(63);
        vm.go_to(15);
        assert!(vm.at_milestone());
        vm.go_to(16);
        assert!(!vm.at_milestone());

        // Exactly on a quarter does not count.
        let mut vm = QuestionnaireVm::new(4);
        vm.go_to(0);
        assert!(!vm.at_milestone());
    }

    #[test]
    fn empty_list_reports_zero_percent() {
        let vm = QuestionnaireVm::new(0);
        assert_eq!(vm.percent(), 0);
        assert!(vm.is_last());
        assert!(!vm.at_milestone());
    }
}
