use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use assess_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, AssessmentSession, ServicesConfig};
use storage::repository::Storage;

use crate::app::ScreenController;
use crate::context::{UiApp, build_app_context};
use crate::views::lead_capture::{LeadCaptureState, render_lead_capture, use_lead_capture};

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<AppServices>,
    session: AssessmentSession,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ScreenHarnessProps {}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let session = use_signal(|| props.session.clone());
    use_context_provider(|| session);
    rsx! { ScreenController {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_screen_harness(session: AssessmentSession) -> ViewHarness {
    setup_screen_harness_with_storage(session, Storage::in_memory())
}

pub fn setup_screen_harness_with_storage(
    session: AssessmentSession,
    storage: Storage,
) -> ViewHarness {
    let app = harness_services(&storage, Duration::ZERO);
    let dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { app, session });
    ViewHarness { dom, storage }
}

fn harness_services(storage: &Storage, submit_delay: Duration) -> Arc<AppServices> {
    let config = ServicesConfig {
        clock: fixed_clock(),
        submit_delay,
        reports_dir: std::env::temp_dir(),
    };
    Arc::new(AppServices::new(storage, config))
}

/// Exposes the lead capture signals and callbacks to the test body.
#[derive(Clone, Default)]
pub struct LeadCaptureHandle(Rc<RefCell<Option<LeadCaptureState>>>);

impl LeadCaptureHandle {
    pub fn get(&self) -> LeadCaptureState {
        self.0.borrow().expect("lead capture registered")
    }
}

impl PartialEq for LeadCaptureHandle {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Props, Clone)]
struct LeadCaptureHarnessProps {
    app: Arc<AppServices>,
    session: AssessmentSession,
    handle: LeadCaptureHandle,
}

impl PartialEq for LeadCaptureHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn LeadCaptureHarness(props: LeadCaptureHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let session = use_signal(|| props.session.clone());
    use_context_provider(|| session);
    rsx! { RegisteredLeadCapture { handle: props.handle.clone() } }
}

#[component]
fn RegisteredLeadCapture(handle: LeadCaptureHandle) -> Element {
    let lead = use_lead_capture();
    *handle.0.borrow_mut() = Some(lead);
    render_lead_capture(lead)
}

pub fn setup_lead_capture_harness(
    session: AssessmentSession,
    storage: Storage,
    submit_delay: Duration,
) -> (ViewHarness, LeadCaptureHandle) {
    let app = harness_services(&storage, submit_delay);
    let handle = LeadCaptureHandle::default();
    let dom = VirtualDom::new_with_props(
        LeadCaptureHarness,
        LeadCaptureHarnessProps {
            app,
            session,
            handle: handle.clone(),
        },
    );
    (ViewHarness { dom, storage }, handle)
}
