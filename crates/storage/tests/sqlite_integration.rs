use assess_core::model::{
    Action, AssessmentState, Country, FrameworkId, Industry, LeadData, LeadPatch, MaturityLevel,
    QuestionId, reduce,
};
use assess_core::time::fixed_now;
use storage::repository::{
    ASSESSMENT_DOCUMENT_KEY, AssessmentDocument, AssessmentRepository, Storage, StorageError,
};
use storage::sqlite::SqliteRepository;

fn completed_state() -> AssessmentState {
    [
        Action::NextStep,
        Action::SetCountry(Country::Uae),
        Action::SetIndustry(Industry::Retail),
        Action::SetFrameworks([FrameworkId::UaeIaNesa, FrameworkId::PciDss].into_iter().collect()),
        Action::NextStep,
        Action::SetAnswer {
            question: QuestionId::new("pci-dss-encryption"),
            level: MaturityLevel::new(4).unwrap(),
        },
        Action::CalculateScores([(FrameworkId::PciDss, 100)].into_iter().collect()),
        Action::NextStep,
        Action::NextStep,
        Action::SetLeadData(LeadPatch::replace_all(LeadData {
            name: "Omar".into(),
            company: "Souk Ltd".into(),
            email: "omar@souk.ae".into(),
            concern: None,
        })),
    ]
    .into_iter()
    .fold(AssessmentState::initial(), reduce)
}

#[tokio::test]
async fn sqlite_roundtrip_keeps_state_and_completion_time() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let doc = AssessmentDocument::new(completed_state(), fixed_now());
    repo.save_document(ASSESSMENT_DOCUMENT_KEY, &doc)
        .await
        .unwrap();

    let loaded = repo
        .load_document(ASSESSMENT_DOCUMENT_KEY)
        .await
        .unwrap()
        .expect("stored document");
    assert_eq!(loaded, doc);
    assert_eq!(loaded.state.scores().get(&FrameworkId::PciDss), Some(&100));
    assert_eq!(loaded.state.lead_data().company, "Souk Ltd");
}

#[tokio::test]
async fn sqlite_overwrites_and_deletes_single_key() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    // Migrations are idempotent.
    repo.migrate().await.expect("migrate twice");

    let first = AssessmentDocument::new(AssessmentState::initial(), fixed_now());
    let second = AssessmentDocument::new(completed_state(), fixed_now());
    repo.save_document(ASSESSMENT_DOCUMENT_KEY, &first)
        .await
        .unwrap();
    repo.save_document(ASSESSMENT_DOCUMENT_KEY, &second)
        .await
        .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        repo.load_document(ASSESSMENT_DOCUMENT_KEY).await.unwrap(),
        Some(second)
    );

    repo.delete_document(ASSESSMENT_DOCUMENT_KEY).await.unwrap();
    assert!(
        repo.load_document(ASSESSMENT_DOCUMENT_KEY)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn sqlite_rejects_documents_from_other_schema_versions() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_version?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query(
        "INSERT INTO documents (key, schema_version, body, updated_at) VALUES (?1, 2, ?2, ?3)",
    )
    .bind(ASSESSMENT_DOCUMENT_KEY)
    .bind(r#"{"schemaVersion":2,"currentStep":"results"}"#)
    .bind(fixed_now())
    .execute(repo.pool())
    .await
    .unwrap();

    let err = repo
        .load_document(ASSESSMENT_DOCUMENT_KEY)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::UnsupportedVersion { found: 2 }));
}

#[tokio::test]
async fn storage_sqlite_constructor_migrates() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    assert!(
        storage
            .documents
            .load_document(ASSESSMENT_DOCUMENT_KEY)
            .await
            .unwrap()
            .is_none()
    );
}
