//! JWT claims for session tokens and document link tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docvault_entity::Role;

/// Distinguishes session tokens from document link tokens.
///
/// The tag is embedded in every token so a document link can never pass
/// the session gate and vice versa.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived API session token carrying an identity and role.
    Session,
    /// Per-recipient document access token.
    Document,
}

/// Claims payload of a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject — the user or institute id.
    pub sub: Uuid,
    /// Identity kind at issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID.
    pub jti: Uuid,
    /// Token kind tag; always `Session`.
    pub kind: TokenKind,
}

/// Claims payload of a document link token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentClaims {
    /// Subject — the recipient user id.
    pub sub: Uuid,
    /// The document this link grants access to.
    pub doc: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID.
    pub jti: Uuid,
    /// Token kind tag; always `Document`.
    pub kind: TokenKind,
}

impl SessionClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

impl DocumentClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Whether the token is still within its validity window at `now`.
    pub fn valid_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() < self.exp
    }
}
