use std::time::Duration;

use assess_core::model::{
    Action, AssessmentState, FrameworkId, LeadField, MaturityLevel, Step,
};
use assess_core::time::fixed_now;
use dioxus::prelude::{ReadableExt, WritableExt};
use services::AssessmentSession;
use storage::repository::{
    ASSESSMENT_DOCUMENT_KEY, AssessmentDocument, AssessmentRepository, Storage, StorageError,
};

use super::lead_capture::LeadCaptureState;
use super::test_harness::{
    ViewHarness, setup_lead_capture_harness, setup_screen_harness,
    setup_screen_harness_with_storage,
};

fn session_at(step: Step, frameworks: &[FrameworkId]) -> AssessmentSession {
    let mut session = AssessmentSession::new();
    session.dispatch(Action::SetFrameworks(frameworks.iter().copied().collect()));
    while session.state().step() != step {
        session.dispatch(Action::NextStep);
    }
    session
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_screen_smoke_renders_intro_and_frameworks() {
    let mut harness = setup_screen_harness(AssessmentSession::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Cybersecurity Self-Assessment"), "missing title in {html}");
    assert!(html.contains("Aramco CCC"), "missing framework chip in {html}");
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
    assert!(!html.contains("Previous assessment"), "unexpected saved note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_screen_smoke_mentions_saved_assessment() {
    let storage = Storage::in_memory();
    let document = AssessmentDocument::new(AssessmentState::initial(), fixed_now());
    storage
        .documents
        .save_document(ASSESSMENT_DOCUMENT_KEY, &document)
        .await
        .expect("save document");

    let mut harness = setup_screen_harness_with_storage(AssessmentSession::new(), storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Previous assessment completed on 11/14/2023."),
        "missing saved note in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn onboarding_screen_smoke_starts_with_country() {
    let mut harness = setup_screen_harness(session_at(Step::Onboarding, &[]));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Step 1 of 3"), "missing sub-step in {html}");
    assert!(html.contains("Saudi Arabia"), "missing country option in {html}");
    assert!(html.contains("Other GCC"), "missing country option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questionnaire_screen_smoke_renders_first_question() {
    let mut harness = setup_screen_harness(session_at(
        Step::Questionnaire,
        &[FrameworkId::Iso27001],
    ));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 6"), "missing position in {html}");
    assert!(
        html.contains("Information Security Management System (ISMS)"),
        "missing question text in {html}"
    );
    assert!(html.contains("Not Implemented"), "missing maturity option in {html}");
    assert!(html.contains("Fully Implemented"), "missing maturity option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questionnaire_screen_smoke_handles_frameworks_without_questions() {
    let mut harness = setup_screen_harness(session_at(Step::Questionnaire, &[FrameworkId::Sama]));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No questions to answer"), "missing empty state in {html}");
    assert!(html.contains("See Results"), "missing results button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_screen_smoke_renders_scores_and_badges() {
    let mut session = session_at(Step::Questionnaire, &[FrameworkId::CisControls]);
    let level = MaturityLevel::new(4).unwrap();
    let ids: Vec<_> = session
        .active_questions()
        .iter()
        .map(|q| q.id.clone())
        .collect();
    for question in ids {
        session.dispatch(Action::SetAnswer { question, level });
    }
    session.finalize_scores();
    session.dispatch(Action::NextStep);

    let mut harness = setup_screen_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Strong Posture"), "missing band in {html}");
    assert!(html.contains("Advanced"), "missing maturity badge in {html}");
    assert!(html.contains("CIS Controls"), "missing framework row in {html}");
    assert!(html.contains("+31 vs avg"), "missing comparison badge in {html}");
    assert!(html.contains("Download Summary Report"), "missing download in {html}");
    assert!(html.contains("Domain Breakdown"), "missing domains in {html}");
    assert!(html.contains("90/100"), "missing scaled governance score in {html}");
    assert!(html.contains("Quick Wins"), "missing roadmap in {html}");
    assert!(html.contains("SOC/SIEM deployment"), "missing roadmap action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lead_capture_screen_smoke_renders_form() {
    let mut harness = setup_screen_harness(session_at(Step::LeadCapture, &[FrameworkId::Pdpl]));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Full Name *"), "missing name field in {html}");
    assert!(html.contains("Business Email *"), "missing email field in {html}");
    assert!(html.contains("Insider threats"), "missing concern option in {html}");
    assert!(html.contains("Get My Comprehensive Report"), "missing submit in {html}");
    assert!(!html.contains("field-error"), "unexpected errors in {html}");
}

struct FailingRepository;

#[async_trait::async_trait]
impl AssessmentRepository for FailingRepository {
    async fn save_document(
        &self,
        _key: &str,
        _document: &AssessmentDocument,
    ) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn load_document(&self, _key: &str) -> Result<Option<AssessmentDocument>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn delete_document(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_screen_smoke_renders_storage_error() {
    let storage = Storage {
        documents: std::sync::Arc::new(FailingRepository),
    };
    let mut harness = setup_screen_harness_with_storage(AssessmentSession::new(), storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("We couldn"), "missing storage error in {html}");
    assert!(html.contains("Start Assessment"), "start should stay available in {html}");
}

fn fill_lead_form(harness: &ViewHarness, lead: LeadCaptureState) {
    harness.dom.in_runtime(|| {
        let mut form = lead.form;
        let mut vm = form.write();
        vm.set_field(LeadField::Name, "Layla Haddad".into());
        vm.set_field(LeadField::Company, "Gulf Freight".into());
        vm.set_field(LeadField::Email, "layla@gulffreight.com".into());
    });
}

async fn drive_until(harness: &mut ViewHarness, needle: &str) -> String {
    for _ in 0..5 {
        harness.drive_async().await;
        let html = harness.render();
        if html.contains(needle) {
            return html;
        }
    }
    harness.render()
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn lead_capture_submit_shows_progress_then_thank_you() {
    let session = session_at(Step::LeadCapture, &[FrameworkId::Pdpl]);
    let (mut harness, handle) = setup_lead_capture_harness(
        session,
        Storage::in_memory(),
        Duration::from_millis(1500),
    );
    harness.rebuild();
    let lead = handle.get();

    fill_lead_form(&harness, lead);
    harness.dom.in_runtime(|| lead.submit.call(()));
    harness.drive();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Submitting..."), "missing busy label in {html}");
    assert!(
        harness
            .storage
            .documents
            .load_document(ASSESSMENT_DOCUMENT_KEY)
            .await
            .expect("load")
            .is_none(),
        "saved before the delay elapsed"
    );

    tokio::time::advance(Duration::from_millis(1500)).await;
    let html = drive_until(&mut harness, "Thank You!").await;
    assert!(html.contains("Thank You!"), "missing thank-you in {html}");
    assert!(html.contains("layla@gulffreight.com"), "missing email in {html}");
    assert!(html.contains("Start New Assessment"), "missing restart in {html}");

    let saved = harness
        .storage
        .documents
        .load_document(ASSESSMENT_DOCUMENT_KEY)
        .await
        .expect("load")
        .expect("document saved");
    assert_eq!(saved.state.lead_data().company, "Gulf Freight");

    harness.dom.in_runtime(|| lead.restart.call(()));
    harness.drive();
    let state = harness.dom.in_runtime(|| lead.session.peek().state().clone());
    assert_eq!(state, AssessmentState::initial());
}

#[tokio::test(flavor = "current_thread")]
async fn lead_capture_storage_failure_is_not_a_field_error() {
    let storage = Storage {
        documents: std::sync::Arc::new(FailingRepository),
    };
    let session = session_at(Step::LeadCapture, &[FrameworkId::Pdpl]);
    let (mut harness, handle) = setup_lead_capture_harness(session, storage, Duration::ZERO);
    harness.rebuild();
    let lead = handle.get();

    fill_lead_form(&harness, lead);
    harness.dom.in_runtime(|| lead.submit.call(()));
    harness.drive();
    let html = drive_until(&mut harness, "We couldn").await;

    assert!(html.contains("We couldn"), "missing infrastructure error in {html}");
    assert!(html.contains("error infrastructure"), "wrong error class in {html}");
    assert!(!html.contains("field-error"), "storage failure shown inline in {html}");
    assert!(!html.contains("Thank You!"), "unexpected thank-you in {html}");
    assert!(
        html.contains("Get My Comprehensive Report"),
        "form should stay open for resubmission in {html}"
    );
    let recorded = harness.dom.in_runtime(|| lead.session.peek().state().lead_data().clone());
    assert_eq!(recorded.name, "Layla Haddad");
}

#[tokio::test(flavor = "current_thread")]
async fn lead_capture_empty_submit_marks_fields() {
    let session = session_at(Step::LeadCapture, &[FrameworkId::Pdpl]);
    let (mut harness, handle) =
        setup_lead_capture_harness(session, Storage::in_memory(), Duration::ZERO);
    harness.rebuild();
    let lead = handle.get();

    harness.dom.in_runtime(|| lead.submit.call(()));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Name is required"), "missing name error in {html}");
    assert!(html.contains("Company name is required"), "missing company error in {html}");
    assert!(html.contains("Email is required"), "missing email error in {html}");
    assert!(!html.contains("Submitting..."), "should not submit in {html}");
    assert!(!html.contains("We couldn"), "validation shown as storage error in {html}");
}
