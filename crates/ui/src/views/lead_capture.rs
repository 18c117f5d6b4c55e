use std::sync::Arc;

use dioxus::prelude::*;

use assess_core::model::{Action, Concern, LeadField};
use services::AssessmentSession;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{LeadFormVm, SubmitPhase};

/// Signals and callbacks behind the lead capture screen.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct LeadCaptureState {
    pub session: Signal<AssessmentSession>,
    pub form: Signal<LeadFormVm>,
    pub phase: Signal<SubmitPhase>,
    pub notice: Signal<Option<String>>,
    pub report_error: Signal<Option<ViewError>>,
    pub submit: Callback<()>,
    pub download: Callback<()>,
    pub restart: Callback<()>,
}

pub(crate) fn use_lead_capture() -> LeadCaptureState {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<AssessmentSession>>();
    let mut form = use_signal(LeadFormVm::default);
    let mut phase = use_signal(SubmitPhase::default);
    let mut notice = use_signal(|| None::<String>);
    let mut report_error = use_signal(|| None::<ViewError>);

    let lead_capture = ctx.lead_capture();
    let submit = use_callback(move |()| {
        if phase().is_busy() {
            return;
        }
        let lead_capture = Arc::clone(&lead_capture);
        let draft = form.read().form.clone();
        if let Err(err) = lead_capture.accept(&mut session.write(), &draft) {
            if let Some(errors) = err.field_errors() {
                form.write().errors = errors.clone();
            }
            return;
        }

        phase.set(SubmitPhase::Submitting);
        let state = session.read().state().clone();
        spawn(async move {
            match lead_capture.complete(state).await {
                Ok(_) => phase.set(SubmitPhase::Submitted),
                Err(err) => {
                    tracing::warn!(error = %err, "lead submission failed");
                    phase.set(SubmitPhase::Failed(ViewError::Storage));
                }
            }
        });
    });

    let reports = ctx.reports();
    let download = use_callback(move |()| {
        let reports = Arc::clone(&reports);
        let state = session.read().state().clone();
        spawn(async move {
            match reports.export(&state).await {
                Ok(path) => notice.set(Some(format!("Report saved to {}", path.display()))),
                Err(err) => {
                    tracing::warn!(error = %err, "report export failed");
                    report_error.set(Some(ViewError::Report));
                }
            }
        });
    });

    let restart = use_callback(move |()| session.write().dispatch(Action::ResetAssessment));

    LeadCaptureState {
        session,
        form,
        phase,
        notice,
        report_error,
        submit,
        download,
        restart,
    }
}

#[component]
pub fn LeadCaptureView() -> Element {
    let lead = use_lead_capture();
    render_lead_capture(lead)
}

pub(crate) fn render_lead_capture(lead: LeadCaptureState) -> Element {
    let LeadCaptureState {
        mut session,
        mut form,
        phase,
        notice,
        report_error,
        submit,
        download,
        restart,
    } = lead;

    if phase() == SubmitPhase::Submitted {
        let email = session.read().state().lead_data().email.clone();
        return rsx! {
            div { class: "page lead-capture submitted",
                h2 { "Thank You!" }
                p { "Your comprehensive report is ready. A copy will also be sent to {email}." }
                if let Some(message) = notice() {
                    p { class: "notice", "{message}" }
                }
                if let Some(err) = report_error() {
                    p { class: "error", "{err.message()}" }
                }
                div { class: "nav",
                    button { class: "primary", onclick: move |_| download.call(()), "Download Your Report Now" }
                    button {
                        class: "secondary",
                        onclick: move |_| restart.call(()),
                        "Start New Assessment"
                    }
                }
            }
        };
    }

    let current = phase();
    let vm = form.read().clone();

    rsx! {
        div { class: "page lead-capture",
            h2 { "Get Your Comprehensive Cybersecurity Report" }
            p { class: "muted",
                "Receive a detailed roadmap, framework-specific recommendations and benchmark analysis."
            }

            if let SubmitPhase::Failed(err) = current {
                p { class: "error infrastructure", "{err.message()}" }
            }

            div { class: "form",
                TextField {
                    label: "Full Name *",
                    value: vm.form.name.clone(),
                    placeholder: "Enter your full name",
                    error: vm.error(LeadField::Name),
                    oninput: move |value: String| form.write().set_field(LeadField::Name, value),
                }
                TextField {
                    label: "Company Name *",
                    value: vm.form.company.clone(),
                    placeholder: "Enter your company name",
                    error: vm.error(LeadField::Company),
                    oninput: move |value: String| form.write().set_field(LeadField::Company, value),
                }
                TextField {
                    label: "Business Email *",
                    value: vm.form.email.clone(),
                    placeholder: "Enter your business email",
                    error: vm.error(LeadField::Email),
                    oninput: move |value: String| form.write().set_field(LeadField::Email, value),
                }

                label { class: "field",
                    span { "Biggest Cybersecurity Concern (optional)" }
                    select {
                        onchange: move |evt: FormEvent| form.write().set_concern(&evt.value()),
                        option { value: "", selected: vm.form.concern.is_none(), "Select your main concern" }
                        for concern in Concern::ALL {
                            option {
                                key: "{concern}",
                                value: "{concern}",
                                selected: vm.form.concern == Some(concern),
                                "{concern}"
                            }
                        }
                    }
                }

                button {
                    class: "primary",
                    disabled: current.is_busy(),
                    onclick: move |_| submit.call(()),
                    "{current.button_label()}"
                }
                p { class: "hint",
                    "We respect your privacy. Your information will only be used to send your report."
                }
            }

            div { class: "nav",
                button {
                    class: "secondary",
                    disabled: current.is_busy(),
                    onclick: move |_| session.write().dispatch(Action::PreviousStep),
                    "Back to Results"
                }
            }
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    value: String,
    placeholder: &'static str,
    error: Option<&'static str>,
    oninput: EventHandler<String>,
) -> Element {
    let input_class = if error.is_some() { "invalid" } else { "" };

    rsx! {
        label { class: "field",
            span { "{label}" }
            input {
                class: input_class,
                value: "{value}",
                placeholder,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}
