//! Institute repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_entity::institute::{CreateInstitute, Institute};
use docvault_entity::user::UserProfile;

/// Repository for institutes and institute-side membership views.
#[derive(Debug, Clone)]
pub struct InstituteRepository {
    pool: PgPool,
}

impl InstituteRepository {
    /// Create a new institute repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an institute by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Institute>> {
        sqlx::query_as::<_, Institute>("SELECT * FROM institutes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find institute by id", e)
            })
    }

    /// Find an institute by administrator email (case-insensitive).
    pub async fn find_by_admin_email(&self, email: &str) -> AppResult<Option<Institute>> {
        sqlx::query_as::<_, Institute>(
            "SELECT * FROM institutes WHERE LOWER(admin_email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find institute by email", e)
        })
    }

    /// Register a new institute.
    pub async fn create(&self, data: &CreateInstitute) -> AppResult<Institute> {
        sqlx::query_as::<_, Institute>(
            "INSERT INTO institutes (name, admin_name, admin_email, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.admin_name)
        .bind(&data.admin_email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("institutes_admin_email_key") =>
            {
                AppError::conflict("Institute email already in use")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("institutes_name_key") =>
            {
                AppError::conflict(format!("Institute '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create institute", e),
        })
    }

    /// Users currently linked to the institute.
    ///
    /// Derived view over approved connection records.
    pub async fn linked_users(&self, institute_id: Uuid) -> AppResult<Vec<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(
            "SELECT u.id, u.name, u.email \
             FROM connections c \
             JOIN users u ON u.id = c.user_id \
             WHERE c.institute_id = $1 AND c.status = 'approved' \
             ORDER BY u.name ASC",
        )
        .bind(institute_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list linked users", e))
    }
}
