//! `AuthPrincipal` extractor — pulls the session JWT from the
//! `x-auth-token` header, validates it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use docvault_core::error::AppError;
use docvault_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header the wire contract carries session tokens in.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Extracted authenticated identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub RequestContext);

impl AuthPrincipal {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthPrincipal {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("No token, authorization denied"))?;

        let claims = state.jwt_decoder.decode_session_token(token)?;

        Ok(AuthPrincipal(RequestContext::new(claims.sub, claims.role)))
    }
}
