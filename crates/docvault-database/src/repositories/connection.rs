//! Connection repository implementation.
//!
//! All lifecycle transitions are conditional single-row statements
//! (`WHERE status = ...`), so a lost race surfaces as "zero rows" rather
//! than a partially-applied state.

use sqlx::PgPool;
use uuid::Uuid;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_entity::connection::{Connection, ConnectionRequest, ConnectionStatus};

/// Repository for connection lifecycle records.
#[derive(Debug, Clone)]
pub struct ConnectionRepository {
    pool: PgPool,
}

impl ConnectionRepository {
    /// Create a new connection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the record for a (user, institute) pair, if any.
    pub async fn find_pair(
        &self,
        user_id: Uuid,
        institute_id: Uuid,
    ) -> AppResult<Option<Connection>> {
        sqlx::query_as::<_, Connection>(
            "SELECT * FROM connections WHERE user_id = $1 AND institute_id = $2",
        )
        .bind(user_id)
        .bind(institute_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find connection", e))
    }

    /// Create a pending record for the pair.
    ///
    /// The unique index on (user_id, institute_id) guarantees that of two
    /// concurrent duplicate requests exactly one succeeds; the loser maps
    /// to `Conflict`.
    pub async fn create_pending(
        &self,
        user_id: Uuid,
        institute_id: Uuid,
    ) -> AppResult<Connection> {
        sqlx::query_as::<_, Connection>(
            "INSERT INTO connections (user_id, institute_id, status) \
             VALUES ($1, $2, 'pending') \
             RETURNING *",
        )
        .bind(user_id)
        .bind(institute_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("connections_user_institute_key") =>
            {
                AppError::conflict("A connection record already exists for this institute")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create connection", e),
        })
    }

    /// Move a pending record to `Approved` or `Rejected`.
    ///
    /// Returns `None` if no pending record exists for the pair — including
    /// the case where another request decided it first.
    pub async fn decide(
        &self,
        user_id: Uuid,
        institute_id: Uuid,
        status: ConnectionStatus,
    ) -> AppResult<Option<Connection>> {
        sqlx::query_as::<_, Connection>(
            "UPDATE connections SET status = $3, updated_at = NOW() \
             WHERE user_id = $1 AND institute_id = $2 AND status = 'pending' \
             RETURNING *",
        )
        .bind(user_id)
        .bind(institute_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update connection", e))
    }

    /// Delete the record for the pair if it has the given status.
    ///
    /// Returns whether a row was removed.
    pub async fn delete_with_status(
        &self,
        user_id: Uuid,
        institute_id: Uuid,
        status: ConnectionStatus,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM connections WHERE user_id = $1 AND institute_id = $2 AND status = $3",
        )
        .bind(user_id)
        .bind(institute_id)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete connection", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Institute-scoped listing with requester profile, filtered by status.
    pub async fn list_for_institute(
        &self,
        institute_id: Uuid,
        status: ConnectionStatus,
    ) -> AppResult<Vec<ConnectionRequest>> {
        sqlx::query_as::<_, ConnectionRequest>(
            "SELECT c.user_id, u.name, u.email, c.status, c.requested_at \
             FROM connections c \
             JOIN users u ON u.id = c.user_id \
             WHERE c.institute_id = $1 AND c.status = $2 \
             ORDER BY c.requested_at ASC",
        )
        .bind(institute_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list connections", e))
    }

    /// Of the given user ids, the subset currently approved for the institute.
    ///
    /// Used to validate group membership edits against linked users.
    pub async fn approved_subset(
        &self,
        institute_id: Uuid,
        user_ids: &[Uuid],
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT user_id FROM connections \
             WHERE institute_id = $1 AND status = 'approved' AND user_id = ANY($2)",
        )
        .bind(institute_id)
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check approved users", e)
        })
    }
}
