//! Auth handlers — signup and login for both identity kinds.

use axum::Json;
use axum::extract::{Path, State};

use docvault_entity::Role;

use crate::dto::request::{InstituteSignupRequest, LoginRequest, UserSignupRequest};
use crate::dto::response::{LoginResponse, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/user/signup
pub async fn user_signup(
    State(state): State<AppState>,
    Json(req): Json<UserSignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    crate::dto::validate(&req)?;

    let session = state
        .auth_service
        .signup_user(&req.name, &req.email, &req.password)
        .await?;

    Ok(Json(TokenResponse {
        token: session.token,
    }))
}

/// POST /api/auth/institute/signup
pub async fn institute_signup(
    State(state): State<AppState>,
    Json(req): Json<InstituteSignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    crate::dto::validate(&req)?;

    let session = state
        .auth_service
        .signup_institute(
            &req.name,
            &req.admin_email,
            &req.password,
            req.admin_name.as_deref(),
        )
        .await?;

    Ok(Json(TokenResponse {
        token: session.token,
    }))
}

/// POST /api/auth/{role}/login
pub async fn login(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    crate::dto::validate(&req)?;
    let role: Role = role.parse()?;

    let session = state.auth_service.login(role, &req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        token: session.token,
        role: session.role,
    }))
}
