//! Document entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Metadata for an uploaded document. Immutable after upload.
///
/// `view_once` and `watermark` are stored policy flags; nothing in the
/// current API surface enforces them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document identifier.
    pub id: Uuid,
    /// Owning institute.
    pub institute_id: Uuid,
    /// File name as uploaded by the institute.
    pub original_file_name: String,
    /// Server-side storage path; never exposed on the wire.
    #[serde(skip_serializing)]
    pub file_path: String,
    /// Link validity window in days, counted from link issuance.
    pub expiry_days: i32,
    /// Whether recipients may view the document only once.
    pub view_once: bool,
    /// Whether views should be watermarked.
    pub watermark: bool,
    /// When the document was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// Data required to persist a document's metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Owning institute.
    pub institute_id: Uuid,
    /// Original file name.
    pub original_file_name: String,
    /// Server-side storage path.
    pub file_path: String,
    /// Recipient group ids.
    pub recipients: Vec<Uuid>,
    /// Link validity window in days.
    pub expiry_days: i32,
    /// View-once policy flag.
    pub view_once: bool,
    /// Watermark policy flag.
    pub watermark: bool,
}

/// An individual recipient produced by group expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// Recipient user id.
    pub user_id: Uuid,
    /// Recipient email.
    pub email: String,
}

/// A signed, time-bounded access link minted for one recipient of one
/// document. Derived at issuance; never persisted, never revocable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureLink {
    /// Recipient user id.
    pub user_id: Uuid,
    /// Recipient email.
    pub email: String,
    /// Full view URL containing the signed token.
    pub link: String,
    /// When the embedded token stops verifying.
    pub expires_at: DateTime<Utc>,
}
