mod lead_capture;
mod onboarding;
mod questionnaire;
mod results;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use lead_capture::LeadCaptureView;
pub use onboarding::OnboardingView;
pub use questionnaire::QuestionnaireView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use welcome::WelcomeView;

pub(crate) fn option_class(selected: bool) -> &'static str {
    if selected { "option selected" } else { "option" }
}
