use dioxus::prelude::*;

use assess_core::catalog::FRAMEWORKS;
use assess_core::model::Action;
use services::AssessmentSession;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

const FEATURES: [(&str, &str); 3] = [
    (
        "Quick Assessment",
        "Complete in just 5-7 minutes with our streamlined questionnaire",
    ),
    (
        "Industry Benchmarking",
        "Compare your scores against industry standards and best practices",
    ),
    (
        "Actionable Report",
        "Receive a detailed report with roadmap and recommendations",
    ),
];

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<AssessmentSession>>();
    let lead_capture = ctx.lead_capture();

    let saved = use_resource(move || {
        let lead_capture = lead_capture.clone();
        async move {
            let document = lead_capture.load_saved().await.map_err(|err| {
                tracing::warn!(error = %err, "could not read saved assessment");
                ViewError::Storage
            })?;
            Ok(document.map(|doc| doc.completed_at.format("%m/%d/%Y").to_string()))
        }
    });

    rsx! {
        div { class: "page welcome",
            h1 { "Cybersecurity Self-Assessment" }
            p { class: "lead",
                "Assess your cybersecurity posture in minutes. Get a personalized report with benchmarks and recommendations."
            }

            div { class: "features",
                for (title, blurb) in FEATURES {
                    div { key: "{title}", class: "card",
                        h3 { "{title}" }
                        p { "{blurb}" }
                    }
                }
            }

            h3 { "Frameworks & Standards Covered" }
            div { class: "chips",
                for info in FRAMEWORKS.iter() {
                    span { key: "{info.id}", class: "chip", "{info.name}" }
                }
            }

            match view_state_from_resource(saved) {
                ViewState::Ready(Some(date)) => rsx! {
                    p { class: "notice", "Previous assessment completed on {date}." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                _ => rsx! {},
            }

            button {
                class: "primary",
                onclick: move |_| session.write().dispatch(Action::NextStep),
                "Start Assessment"
            }
            p { class: "hint", "Expected time: 5-7 minutes" }
        }
    }
}
