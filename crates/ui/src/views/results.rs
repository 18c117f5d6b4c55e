use dioxus::prelude::*;

use assess_core::model::Action;
use services::AssessmentSession;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{ROADMAP, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<AssessmentSession>>();
    let mut notice = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<ViewError>);

    let vm = map_results(&session.read());

    let on_download = move |_| {
        let reports = ctx.reports();
        let state = session.read().state().clone();
        spawn(async move {
            match reports.export(&state).await {
                Ok(path) => {
                    error.set(None);
                    notice.set(Some(format!("Report saved to {}", path.display())));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "summary report export failed");
                    error.set(Some(ViewError::Report));
                }
            }
        });
    };

    rsx! {
        div { class: "page results",
            h2 { "Your Cybersecurity Assessment Results" }

            div { class: "card overall",
                div { class: "score", "{vm.overall}" }
                span { class: "muted", "/100 Overall Score" }
                div { class: "chips",
                    span { class: "chip {vm.band_class}", "{vm.band}" }
                    span { class: "chip", "{vm.maturity}" }
                }
                p { "{vm.interpretation}" }
            }

            h3 { "Framework Scores vs Industry Benchmarks" }
            if vm.rows.is_empty() {
                p { class: "muted", "No frameworks were scored." }
            }
            ul { class: "comparisons",
                for row in vm.rows {
                    li { key: "{row.name}", class: "comparison {row.standing_class}",
                        strong { "{row.name}" }
                        span { " {row.score}% (avg {row.benchmark}%) " }
                        span { class: "chip", "{row.badge}" }
                        if let Some(highlight) = row.highlight {
                            span { class: "chip highlight", "{highlight}" }
                        }
                    }
                }
            }

            h3 { "Domain Breakdown" }
            ul { class: "domains",
                for domain in vm.domains {
                    li { key: "{domain.name}", class: "domain",
                        span { "{domain.name}" }
                        span { class: "chip {domain.band_class}", "{domain.score}/100" }
                        div { class: "bar",
                            div { class: "fill", style: "width: {domain.score}%" }
                        }
                    }
                }
            }

            h3 { "Recommended Roadmap" }
            div { class: "roadmap",
                for phase in ROADMAP {
                    div { key: "{phase.title}", class: "phase",
                        h4 { "{phase.title}" }
                        span { class: "muted", "{phase.window}" }
                        ul {
                            for action in phase.actions {
                                li { key: "{action}", "{action}" }
                            }
                        }
                    }
                }
            }

            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }

            div { class: "nav",
                button {
                    class: "secondary",
                    onclick: move |_| session.write().dispatch(Action::PreviousStep),
                    "Back"
                }
                button { class: "secondary", onclick: on_download, "Download Summary Report" }
                button {
                    class: "primary",
                    onclick: move |_| session.write().dispatch(Action::NextStep),
                    "Get Full Report & Recommendations"
                }
            }
        }
    }
}
