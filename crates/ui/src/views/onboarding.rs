use dioxus::prelude::*;

use assess_core::catalog::grouped_frameworks;
use assess_core::model::{Action, Country, Industry};
use services::AssessmentSession;

use crate::views::option_class;
use crate::vm::{OnboardingOutcome, OnboardingStep, OnboardingVm};

#[component]
pub fn OnboardingView() -> Element {
    let mut session = use_context::<Signal<AssessmentSession>>();
    let mut vm = use_signal(|| OnboardingVm::new(session.read().state()));

    let state = session.read().state().clone();
    let recommended = session.read().recommended_frameworks();
    let step = vm.read().step();
    let can_advance = vm.read().can_advance(&state);
    let summary = vm.read().summary();

    let on_next = move |_| {
        let outcome = vm.write().next();
        if let OnboardingOutcome::Confirm(selected) = outcome {
            let mut session = session.write();
            session.dispatch(Action::SetFrameworks(selected));
            session.dispatch(Action::NextStep);
        }
    };
    let on_back = move |_| {
        if vm.write().back() == OnboardingOutcome::Leave {
            session.write().dispatch(Action::PreviousStep);
        }
    };

    rsx! {
        div { class: "page onboarding",
            div { class: "step-header",
                h2 { "Setup Your Assessment" }
                span { class: "muted", "Step {step.number()} of 3" }
            }
            h3 { "{step.heading()}" }

            match step {
                OnboardingStep::Country => rsx! {
                    div { class: "options",
                        for country in Country::ALL {
                            button {
                                key: "{country}",
                                class: option_class(state.country() == Some(country)),
                                onclick: move |_| session.write().dispatch(Action::SetCountry(country)),
                                "{country}"
                            }
                        }
                    }
                },
                OnboardingStep::Industry => rsx! {
                    div { class: "options",
                        for industry in Industry::ALL {
                            button {
                                key: "{industry}",
                                class: option_class(state.industry() == Some(industry)),
                                onclick: move |_| {
                                    session.write().dispatch(Action::SetIndustry(industry));
                                    let recommended = session.read().recommended_frameworks();
                                    vm.write().apply_recommendation(recommended);
                                },
                                "{industry}"
                            }
                        }
                    }
                },
                OnboardingStep::Frameworks => rsx! {
                    p { class: "muted", "We pre-selected frameworks for your profile. Adjust as needed." }
                    div { class: "stats",
                        div { class: "stat",
                            strong { "{summary.count}" }
                            span { "Selected" }
                        }
                        div { class: "stat",
                            strong { "{summary.min_minutes}" }
                            span { "Min Minutes" }
                        }
                        div { class: "stat",
                            strong { "{summary.critical}" }
                            span { "Critical" }
                        }
                    }
                    for (group, members) in grouped_frameworks() {
                        div { key: "{group}", class: "framework-group",
                            h4 { "{group}" }
                            ul { class: "framework-list",
                                for info in members {
                                    li { key: "{info.id}", class: "framework",
                                        label {
                                            input {
                                                r#type: "checkbox",
                                                checked: vm.read().is_selected(info.id),
                                                onchange: {
                                                    let id = info.id;
                                                    move |_| vm.write().toggle(id)
                                                },
                                            }
                                            strong { "{info.name}" }
                                            if info.is_critical() {
                                                span { class: "chip critical", "Critical" }
                                            }
                                            if recommended.contains(&info.id) {
                                                span { class: "chip recommended", "Recommended" }
                                            }
                                        }
                                        p { class: "muted", "{info.description}" }
                                        p { class: "meta",
                                            "Complexity: {info.complexity} · {info.estimated_time()} · {info.relevance}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p { class: "muted",
                        "{summary.count} framework(s) selected · Estimated time: {summary.min_minutes}-{summary.max_minutes} minutes"
                    }
                },
            }

            div { class: "nav",
                button { class: "secondary", onclick: on_back, "Back" }
                button {
                    class: "primary",
                    disabled: !can_advance,
                    onclick: on_next,
                    if step == OnboardingStep::Frameworks { "Start Questionnaire" } else { "Next" }
                }
            }
        }
    }
}
