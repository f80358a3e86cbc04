//! Institute entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tenant organization.
///
/// Linked users are derived from approved connection records rather than
/// kept as a list on the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Institute {
    /// Unique institute identifier.
    pub id: Uuid,
    /// Institute name, unique.
    pub name: String,
    /// Contact name of the administrator.
    pub admin_name: Option<String>,
    /// Administrator email, unique, used for login.
    pub admin_email: String,
    /// Argon2 password hash of the administrator credential.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the institute was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new institute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInstitute {
    /// Institute name.
    pub name: String,
    /// Administrator contact name.
    pub admin_name: Option<String>,
    /// Administrator email.
    pub admin_email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Public projection of an institute, as returned to connected users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InstituteProfile {
    /// Institute identifier.
    pub id: Uuid,
    /// Institute name.
    pub name: String,
    /// Administrator contact name.
    pub admin_name: Option<String>,
    /// Administrator email.
    pub admin_email: String,
}
