//! Group entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named collection of users scoped to one institute, used as the
/// recipient unit for document uploads. Membership lives in a separate
/// join table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group identifier.
    pub id: Uuid,
    /// Owning institute.
    pub institute_id: Uuid,
    /// Group name.
    pub name: String,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    /// Owning institute.
    pub institute_id: Uuid,
    /// Group name.
    pub name: String,
}
