//! Group repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_entity::document::Recipient;
use docvault_entity::group::{CreateGroup, Group};
use docvault_entity::user::UserProfile;

/// Repository for groups and group membership.
#[derive(Debug, Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Create a new group repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a group by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Group>> {
        sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find group by id", e)
            })
    }

    /// Create a new group.
    pub async fn create(&self, data: &CreateGroup) -> AppResult<Group> {
        sqlx::query_as::<_, Group>(
            "INSERT INTO groups (institute_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.institute_id)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create group", e))
    }

    /// List an institute's groups.
    pub async fn list_by_institute(&self, institute_id: Uuid) -> AppResult<Vec<Group>> {
        sqlx::query_as::<_, Group>(
            "SELECT * FROM groups WHERE institute_id = $1 ORDER BY created_at ASC",
        )
        .bind(institute_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list groups", e))
    }

    /// Current members of a group.
    pub async fn members(&self, group_id: Uuid) -> AppResult<Vec<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(
            "SELECT u.id, u.name, u.email \
             FROM group_members gm \
             JOIN users u ON u.id = gm.user_id \
             WHERE gm.group_id = $1 \
             ORDER BY u.name ASC",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list group members", e))
    }

    /// Replace the membership of a group in one transaction.
    pub async fn replace_members(&self, group_id: Uuid, member_ids: &[Uuid]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM group_members WHERE group_id = $1")
            .bind(group_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear group members", e)
            })?;

        sqlx::query(
            "INSERT INTO group_members (group_id, user_id) \
             SELECT $1, unnest($2::uuid[]) \
             ON CONFLICT DO NOTHING",
        )
        .bind(group_id)
        .bind(member_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert group members", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit membership change", e)
        })
    }

    /// Expand a set of groups into their distinct individual members.
    ///
    /// Pure set union: overlapping memberships are deduplicated by the
    /// DISTINCT clause. Nonexistent group ids simply contribute nothing.
    pub async fn expand_members(&self, group_ids: &[Uuid]) -> AppResult<Vec<Recipient>> {
        sqlx::query_as::<_, Recipient>(
            "SELECT DISTINCT u.id AS user_id, u.email \
             FROM group_members gm \
             JOIN users u ON u.id = gm.user_id \
             WHERE gm.group_id = ANY($1)",
        )
        .bind(group_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to expand group recipients", e)
        })
    }
}
