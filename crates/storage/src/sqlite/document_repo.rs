use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{AssessmentDocument, AssessmentRepository, StorageError};

use super::SqliteRepository;

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

#[async_trait]
impl AssessmentRepository for SqliteRepository {
    async fn save_document(
        &self,
        key: &str,
        document: &AssessmentDocument,
    ) -> Result<(), StorageError> {
        let body = document.to_json()?;
        sqlx::query(
            r"
            INSERT INTO documents (key, schema_version, body, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(key) DO UPDATE SET
                schema_version = excluded.schema_version,
                body = excluded.body,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(i64::from(document.schema_version))
        .bind(body)
        .bind(document.completed_at)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        tracing::debug!(key, "saved assessment document");
        Ok(())
    }

    async fn load_document(&self, key: &str) -> Result<Option<AssessmentDocument>, StorageError> {
        let row = sqlx::query("SELECT body FROM documents WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let body: String = row.try_get("body").map_err(ser)?;
        AssessmentDocument::from_json(&body).map(Some)
    }

    async fn delete_document(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM documents WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(conn)?;
        Ok(())
    }
}
