//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use docvault_core::config::auth::AuthConfig;
use docvault_core::error::AppError;
use docvault_entity::Role;

use super::claims::{DocumentClaims, SessionClaims, TokenKind};

/// Creates signed session and document link tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session token TTL in minutes.
    session_ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("session_ttl_minutes", &self.session_ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            session_ttl_minutes: config.session_ttl_minutes as i64,
        }
    }

    /// Generates a session token for the given identity and role.
    pub fn generate_session_token(
        &self,
        subject: Uuid,
        role: Role,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.session_ttl_minutes);

        let claims = SessionClaims {
            sub: subject,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            kind: TokenKind::Session,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok((token, exp))
    }

    /// Generates a document link token for one recipient.
    ///
    /// The validity window starts at issuance, not at document upload.
    pub fn generate_document_token(
        &self,
        document_id: Uuid,
        recipient_id: Uuid,
        expiry_days: i32,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(expiry_days as i64);

        let claims = DocumentClaims {
            sub: recipient_id,
            doc: document_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            kind: TokenKind::Document,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode document token: {e}")))?;

        Ok((token, exp))
    }
}
