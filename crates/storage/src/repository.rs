use assess_core::model::AssessmentState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Fixed key the completed assessment is stored under.
pub const ASSESSMENT_DOCUMENT_KEY: &str = "cybersecurity-assessment";

/// Version written into every document. Any other version is rejected on load.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("unsupported document schema version {found} (expected {SCHEMA_VERSION})")]
    UnsupportedVersion { found: u64 },
}

/// Persisted shape of a completed assessment.
///
/// The state's fields are flattened next to the version and completion
/// timestamp, so the stored JSON reads as one flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDocument {
    pub schema_version: u32,
    #[serde(flatten)]
    pub state: AssessmentState,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentDocument {
    #[must_use]
    pub fn new(state: AssessmentState, completed_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            state,
            completed_at,
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the state cannot be encoded.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Decode a stored document, checking the schema version before the shape.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::UnsupportedVersion` for documents written by another
    /// schema, or `StorageError::Serialization` for malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
        let found = value
            .get("schemaVersion")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0);
        if found != u64::from(SCHEMA_VERSION) {
            return Err(StorageError::UnsupportedVersion { found });
        }
        serde_json::from_value(value).map_err(|err| StorageError::Serialization(err.to_string()))
    }
}

/// Repository contract for the persisted assessment document.
///
/// Single writer, single key, last write wins.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Persist or replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be stored.
    async fn save_document(
        &self,
        key: &str,
        document: &AssessmentDocument,
    ) -> Result<(), StorageError>;

    /// Fetch the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for connection, decoding or version failures.
    async fn load_document(&self, key: &str) -> Result<Option<AssessmentDocument>, StorageError>;

    /// Remove the document stored under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the delete.
    async fn delete_document(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Documents are kept as encoded JSON so reads exercise the same decoding
/// path as the persistent backend.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    documents: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under `key`, bypassing encoding. Useful for fixtures.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, key: &str, raw: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .documents
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), raw.into());
        Ok(())
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryRepository {
    async fn save_document(
        &self,
        key: &str,
        document: &AssessmentDocument,
    ) -> Result<(), StorageError> {
        let encoded = document.to_json()?;
        self.put_raw(key, encoded)
    }

    async fn load_document(&self, key: &str) -> Result<Option<AssessmentDocument>, StorageError> {
        let raw = {
            let guard = self
                .documents
                .lock()
                .map_err(|e| StorageError::Connection(e.to_string()))?;
            guard.get(key).cloned()
        };
        raw.as_deref().map(AssessmentDocument::from_json).transpose()
    }

    async fn delete_document(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .documents
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub documents: Arc<dyn AssessmentRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let documents: Arc<dyn AssessmentRepository> = Arc::new(InMemoryRepository::new());
        Self { documents }
    }
}
