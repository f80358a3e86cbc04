//! Connection record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ConnectionStatus;

/// A join-request record between a user and an institute.
///
/// At most one record exists per (user, institute) pair; the database
/// enforces this with a unique index. The record is the single source of
/// truth for membership: "linked users" and "connected institutes" are
/// both queries over approved records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Record identifier.
    pub id: Uuid,
    /// The requesting user.
    pub user_id: Uuid,
    /// The target institute.
    pub institute_id: Uuid,
    /// Current lifecycle state.
    pub status: ConnectionStatus,
    /// When the join request was made.
    pub requested_at: DateTime<Utc>,
    /// When the record last changed state.
    pub updated_at: DateTime<Utc>,
}

/// A connection record joined with the requester's profile, as shown to
/// institutes in the pending/rejected listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    /// The requesting user.
    pub user_id: Uuid,
    /// Requester display name.
    pub name: String,
    /// Requester email.
    pub email: String,
    /// Current lifecycle state.
    pub status: ConnectionStatus,
    /// When the join request was made.
    pub requested_at: DateTime<Utc>,
}
