use std::collections::BTreeSet;

use assess_core::catalog::framework_info;
use assess_core::model::{AssessmentState, FrameworkId};
use assess_core::recommend::recommend_frameworks;

/// The three onboarding sub-steps, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnboardingStep {
    Country,
    Industry,
    Frameworks,
}

impl OnboardingStep {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            OnboardingStep::Country => 1,
            OnboardingStep::Industry => 2,
            OnboardingStep::Frameworks => 3,
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            OnboardingStep::Country => "Where is your organization based?",
            OnboardingStep::Industry => "Which industry are you in?",
            OnboardingStep::Frameworks => "Which frameworks should we assess?",
        }
    }
}

/// What the view should do after a Next/Back press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OnboardingOutcome {
    Stay,
    Leave,
    Confirm(BTreeSet<FrameworkId>),
}

/// Totals shown above the framework checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub count: usize,
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub critical: usize,
}

/// Local onboarding state. Country and industry live in the assessment state;
/// the framework checklist stays local until confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnboardingVm {
    step: OnboardingStep,
    selected: BTreeSet<FrameworkId>,
}

impl OnboardingVm {
    /// Start at the first sub-step, keeping any previously confirmed selection.
    /// With nothing confirmed yet but an industry on record, the checklist
    /// starts from the recommendation instead.
    #[must_use]
    pub fn new(state: &AssessmentState) -> Self {
        let confirmed = state.selected_frameworks();
        let selected = if confirmed.is_empty() && state.industry().is_some() {
            recommend_frameworks(state.country(), state.industry())
        } else {
            confirmed.clone()
        };
        Self {
            step: OnboardingStep::Country,
            selected,
        }
    }

    #[must_use]
    pub fn summary(&self) -> SelectionSummary {
        self.selected
            .iter()
            .map(|id| framework_info(*id))
            .fold(SelectionSummary::default(), |mut acc, info| {
                let (min, max) = info.estimated_minutes;
                acc.count += 1;
                acc.min_minutes += u32::from(min);
                acc.max_minutes += u32::from(max);
                acc.critical += usize::from(info.is_critical());
                acc
            })
    }

    #[must_use]
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<FrameworkId> {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, framework: FrameworkId) -> bool {
        self.selected.contains(&framework)
    }

    /// Replace the checklist with the recommendation for a newly chosen industry.
    pub fn apply_recommendation(&mut self, recommended: BTreeSet<FrameworkId>) {
        self.selected = recommended;
    }

    pub fn toggle(&mut self, framework: FrameworkId) {
        if !self.selected.remove(&framework) {
            self.selected.insert(framework);
        }
    }

    #[must_use]
    pub fn can_advance(&self, state: &AssessmentState) -> bool {
        match self.step {
            OnboardingStep::Country => state.country().is_some(),
            OnboardingStep::Industry => state.industry().is_some(),
            OnboardingStep::Frameworks => !self.selected.is_empty(),
        }
    }

    pub fn next(&mut self) -> OnboardingOutcome {
        match self.step {
            OnboardingStep::Country => {
                self.step = OnboardingStep::Industry;
                OnboardingOutcome::Stay
            }
            OnboardingStep::Industry => {
                self.step = OnboardingStep::Frameworks;
                OnboardingOutcome::Stay
            }
            OnboardingStep::Frameworks => OnboardingOutcome::Confirm(self.selected.clone()),
        }
    }

    pub fn back(&mut self) -> OnboardingOutcome {
        match self.step {
            OnboardingStep::Country => OnboardingOutcome::Leave,
            OnboardingStep::Industry => {
                self.step = OnboardingStep::Country;
                OnboardingOutcome::Stay
            }
            OnboardingStep::Frameworks => {
                self.step = OnboardingStep::Industry;
                OnboardingOutcome::Stay
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::model::{Action, Country, Industry, reduce};

    #[test]
    fn walks_sub_steps_and_confirms_selection() {
        let mut state = AssessmentState::initial();
        let mut vm = OnboardingVm::new(&state);
        assert!(!vm.can_advance(&state));

        state = reduce(state, Action::SetCountry(Country::SaudiArabia));
        assert!(vm.can_advance(&state));
        assert_eq!(vm.next(), OnboardingOutcome::Stay);
        assert_eq!(vm.step(), OnboardingStep::Industry);
        assert!(!vm.can_advance(&state));

        state = reduce(state, Action::SetIndustry(Industry::OilAndGas));
        vm.apply_recommendation(recommend_frameworks(state.country(), state.industry()));
        assert_eq!(vm.next(), OnboardingOutcome::Stay);
        assert!(vm.is_selected(FrameworkId::AramcoCcc));

        vm.toggle(FrameworkId::AramcoCcc);
        vm.toggle(FrameworkId::Gdpr);
        match vm.next() {
            OnboardingOutcome::Confirm(selected) => {
                assert!(!selected.contains(&FrameworkId::AramcoCcc));
                assert!(selected.contains(&FrameworkId::Gdpr));
            }
            other => panic!("expected confirm, got {other:?}"),
        }
    }

    #[test]
    fn empty_checklist_blocks_confirmation() {
        let state = AssessmentState::initial();
        let mut vm = OnboardingVm::new(&state);
        vm.next();
        vm.next();
        assert_eq!(vm.step(), OnboardingStep::Frameworks);
        assert!(!vm.can_advance(&state));
    }

    #[test]
    fn reentry_with_industry_but_no_selection_seeds_recommendation() {
        let state = [
            Action::SetCountry(Country::SaudiArabia),
            Action::SetIndustry(Industry::Banking),
        ]
        .into_iter()
        .fold(AssessmentState::initial(), reduce);

        let vm = OnboardingVm::new(&state);
        assert_eq!(
            vm.selected(),
            &recommend_frameworks(Some(Country::SaudiArabia), Some(Industry::Banking))
        );

        let confirmed = reduce(
            state,
            Action::SetFrameworks([FrameworkId::Gdpr].into_iter().collect()),
        );
        let vm = OnboardingVm::new(&confirmed);
        assert_eq!(vm.selected().len(), 1);
        assert!(vm.is_selected(FrameworkId::Gdpr));
    }

    #[test]
    fn summary_adds_time_ranges_and_counts_critical() {
        let mut vm = OnboardingVm::new(&AssessmentState::initial());
        assert_eq!(vm.summary(), SelectionSummary::default());

        vm.toggle(FrameworkId::NcaEcc);
        vm.toggle(FrameworkId::Iso27001);
        assert_eq!(
            vm.summary(),
            SelectionSummary {
                count: 2,
                min_minutes: 35,
                max_minutes: 45,
                critical: 1,
            }
        );
    }

    #[test]
    fn back_from_first_sub_step_leaves_onboarding() {
        let mut vm = OnboardingVm::new(&AssessmentState::initial());
        vm.next();
        assert_eq!(vm.back(), OnboardingOutcome::Stay);
        assert_eq!(vm.back(), OnboardingOutcome::Leave);
    }
}
