//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::de::DeserializeOwned;

use docvault_core::config::auth::AuthConfig;
use docvault_core::error::AppError;

use super::claims::{DocumentClaims, SessionClaims, TokenKind};

/// Validates session and document link tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    ///
    /// Checks signature, expiration, and that the token kind is `Session`.
    pub fn decode_session_token(&self, token: &str) -> Result<SessionClaims, AppError> {
        let claims: SessionClaims = self.decode_token(token)?;

        if claims.kind != TokenKind::Session {
            return Err(AppError::unauthorized(
                "Invalid token kind: expected session token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a document link token string.
    pub fn decode_document_token(&self, token: &str) -> Result<DocumentClaims, AppError> {
        let claims: DocumentClaims = self.decode_token(token)?;

        if claims.kind != TokenKind::Document {
            return Err(AppError::unauthorized(
                "Invalid token kind: expected document token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without kind checking.
    fn decode_token<C: DeserializeOwned>(&self, token: &str) -> Result<C, AppError> {
        let token_data = decode::<C>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Token is not valid")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            }
        })?;

        Ok(token_data.claims)
    }
}
