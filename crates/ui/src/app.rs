use dioxus::prelude::*;

use assess_core::model::Step;
use services::AssessmentSession;

use crate::views::{LeadCaptureView, OnboardingView, QuestionnaireView, ResultsView, WelcomeView};

#[component]
pub fn App() -> Element {
    let session = use_signal(AssessmentSession::new);
    use_context_provider(|| session);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Cybersecurity Assessment" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ScreenController {}
            }
        }
    }
}

/// Renders exactly one screen for the session's current step.
#[component]
pub fn ScreenController() -> Element {
    let session = use_context::<Signal<AssessmentSession>>();
    let step = session.read().state().step();

    rsx! {
        match step {
            Step::Welcome => rsx! { WelcomeView {} },
            Step::Onboarding => rsx! { OnboardingView {} },
            Step::Questionnaire => rsx! { QuestionnaireView {} },
            Step::Results => rsx! { ResultsView {} },
            Step::LeadCapture => rsx! { LeadCaptureView {} },
        }
    }
}
