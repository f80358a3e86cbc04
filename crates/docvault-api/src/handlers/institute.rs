//! Institute dashboard handlers — membership from the institute's side.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use docvault_entity::connection::ConnectionRequest;
use docvault_entity::user::UserProfile;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// GET /api/dashboard/institute/linked-users
pub async fn linked_users(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let users = state.connection_service.linked_users(auth.context()).await?;
    Ok(Json(users))
}

/// GET /api/dashboard/institute/pending
pub async fn pending_requests(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<Vec<ConnectionRequest>>, ApiError> {
    let requests = state.connection_service.list_pending(auth.context()).await?;
    Ok(Json(requests))
}

/// GET /api/dashboard/institute/rejected
pub async fn rejected_requests(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<Vec<ConnectionRequest>>, ApiError> {
    let requests = state.connection_service.list_rejected(auth.context()).await?;
    Ok(Json(requests))
}

/// PUT /api/dashboard/institute/approve/{userId}
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.connection_service.approve(auth.context(), user_id).await?;
    Ok(Json(MessageResponse::new(
        "User approved and linked successfully",
    )))
}

/// PUT /api/dashboard/institute/reject/{userId}
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.connection_service.reject(auth.context(), user_id).await?;
    Ok(Json(MessageResponse::new("User request rejected.")))
}

/// DELETE /api/dashboard/institute/rejected/{userId}
pub async fn clear_rejected(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .connection_service
        .clear_rejected(auth.context(), user_id)
        .await?;
    Ok(Json(MessageResponse::new(
        "Rejected record deleted. User is now allowed to submit a new request.",
    )))
}
