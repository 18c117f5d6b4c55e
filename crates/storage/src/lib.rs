#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    ASSESSMENT_DOCUMENT_KEY, AssessmentDocument, AssessmentRepository, InMemoryRepository,
    SCHEMA_VERSION, Storage, StorageError,
};
