//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docvault_entity::Role;
use docvault_entity::document::SecureLink;

/// Generic `{"msg": ...}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome message.
    pub msg: String,
}

impl MessageResponse {
    /// Builds a message body.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Signup response: the first session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token.
    pub token: String,
}

/// Login response: token plus the authenticated role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed session token.
    pub token: String,
    /// Role embedded in the token.
    pub role: Role,
}

/// Upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Human-readable outcome message.
    pub msg: String,
    /// The persisted document id.
    pub document_id: Uuid,
    /// Distinct individual recipients after group expansion.
    pub recipients_count: usize,
    /// Signed view links, one per recipient.
    pub links: Vec<SecureLink>,
}

/// Health probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status string.
    pub status: String,
    /// Whether the database answered the probe.
    pub database: bool,
}
