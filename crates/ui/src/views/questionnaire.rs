use std::time::Duration;

use dioxus::prelude::*;

use assess_core::model::{Action, MaturityLevel};
use services::AssessmentSession;

use crate::views::option_class;
use crate::vm::{ENCOURAGEMENT, QuestionnaireOutcome, QuestionnaireVm};

const ENCOURAGEMENT_VISIBLE: Duration = Duration::from_secs(3);

fn dot_class(current: bool, answered: bool) -> &'static str {
    if current {
        "dot current"
    } else if answered {
        "dot answered"
    } else {
        "dot"
    }
}

#[component]
pub fn QuestionnaireView() -> Element {
    let mut session = use_context::<Signal<AssessmentSession>>();
    let questions = session.read().active_questions();
    let mut vm = use_signal(|| QuestionnaireVm::new(questions.len()));
    let mut encouragement = use_signal(|| false);

    let mut finish = move || {
        let mut session = session.write();
        session.finalize_scores();
        session.dispatch(Action::NextStep);
    };

    let Some(question) = questions.get(vm.read().index()).copied() else {
        return rsx! {
            div { class: "page questionnaire",
                h2 { "No questions to answer" }
                p { class: "muted",
                    "The selected frameworks have no questions yet. Go back to adjust your selection or continue to your results."
                }
                div { class: "nav",
                    button {
                        class: "secondary",
                        onclick: move |_| session.write().dispatch(Action::PreviousStep),
                        "Back"
                    }
                    button { class: "primary", onclick: move |_| finish(), "See Results" }
                }
            }
        };
    };

    let current = session.read().state().answer(&question.id);
    let progress = session.read().progress();
    let answered: Vec<bool> = questions
        .iter()
        .map(|q| session.read().state().answer(&q.id).is_some())
        .collect();
    let cursor = *vm.read();

    let on_next = move |_| {
        let outcome = vm.write().next();
        match outcome {
            QuestionnaireOutcome::Finished => finish(),
            QuestionnaireOutcome::Moved if vm.read().at_milestone() => {
                encouragement.set(true);
                spawn(async move {
                    tokio::time::sleep(ENCOURAGEMENT_VISIBLE).await;
                    encouragement.set(false);
                });
            }
            QuestionnaireOutcome::Moved | QuestionnaireOutcome::Left => {}
        }
    };
    let on_back = move |_| {
        if vm.write().back() == QuestionnaireOutcome::Left {
            session.write().dispatch(Action::PreviousStep);
        }
    };

    rsx! {
        div { class: "page questionnaire",
            div { class: "step-header",
                h2 { "{cursor.position_label()}" }
                span { class: "muted", "{cursor.percent()}% complete" }
            }
            div { class: "bar",
                div { class: "bar-fill", style: "width: {cursor.percent()}%" }
            }

            ul { class: "category-progress",
                for entry in progress.per_category.iter().filter(|c| c.tally.total > 0) {
                    li { key: "{entry.category}",
                        "{entry.category}: {entry.tally.answered}/{entry.tally.total}"
                    }
                }
            }

            if encouragement() {
                div { class: "notice", "{ENCOURAGEMENT}" }
            }

            div { class: "card question",
                div { class: "chips",
                    span { class: "chip", "{question.framework.label()}" }
                    span { class: "chip", "{question.category}" }
                }
                h3 { "{question.text}" }
                if let Some(description) = question.description.as_deref() {
                    p { class: "muted", "{description}" }
                }

                p { "Please select your maturity level:" }
                div { class: "maturity",
                    for level in MaturityLevel::ALL {
                        button {
                            key: "{level.value()}",
                            class: option_class(current == Some(level)),
                            onclick: {
                                let id = question.id.clone();
                                move |_| {
                                    session.write().dispatch(Action::SetAnswer {
                                        question: id.clone(),
                                        level,
                                    });
                                }
                            },
                            strong { "{level.label()}" }
                            span { class: "muted", " Level {level.value()}/4" }
                            p { "{level.description()}" }
                        }
                    }
                }
            }

            div { class: "nav",
                button { class: "secondary", onclick: on_back, "Back" }
                button {
                    class: "primary",
                    disabled: current.is_none(),
                    onclick: on_next,
                    if cursor.is_last() { "Complete Assessment" } else { "Next" }
                }
            }

            div { class: "dots",
                for (index, done) in answered.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: dot_class(index == cursor.index(), done),
                        onclick: move |_| vm.write().go_to(index),
                        "{index + 1}"
                    }
                }
            }
        }
    }
}
