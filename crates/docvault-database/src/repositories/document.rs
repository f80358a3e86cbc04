//! Document repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_entity::document::{CreateDocument, Document};

/// Repository for document metadata.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist document metadata and its recipient groups atomically.
    ///
    /// Metadata row and recipient rows share one transaction so a
    /// half-written document can never be observed.
    pub async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let document = sqlx::query_as::<_, Document>(
            "INSERT INTO documents \
             (institute_id, original_file_name, file_path, expiry_days, view_once, watermark) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.institute_id)
        .bind(&data.original_file_name)
        .bind(&data.file_path)
        .bind(data.expiry_days)
        .bind(data.view_once)
        .bind(data.watermark)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create document", e))?;

        sqlx::query(
            "INSERT INTO document_recipients (document_id, group_id) \
             SELECT $1, unnest($2::uuid[]) \
             ON CONFLICT DO NOTHING",
        )
        .bind(document.id)
        .bind(&data.recipients)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store document recipients", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit document", e)
        })?;

        Ok(document)
    }

    /// List an institute's uploads, newest first.
    pub async fn list_by_institute(&self, institute_id: Uuid) -> AppResult<Vec<Document>> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE institute_id = $1 ORDER BY uploaded_at DESC",
        )
        .bind(institute_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

}
