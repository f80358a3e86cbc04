//! User dashboard handlers — membership from the user's side.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use docvault_entity::institute::InstituteProfile;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// GET /api/dashboard/user/institutes
pub async fn connected_institutes(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<Vec<InstituteProfile>>, ApiError> {
    let institutes = state
        .connection_service
        .connected_institutes(auth.context())
        .await?;
    Ok(Json(institutes))
}

/// POST /api/dashboard/user/join/{instituteId}
pub async fn request_join(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(institute_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let institute_name = state
        .connection_service
        .request_join(auth.context(), institute_id)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Request to join {institute_name} sent successfully. Awaiting approval."
    ))))
}

/// POST /api/dashboard/user/leave/{instituteId}
pub async fn leave(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(institute_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .connection_service
        .leave(auth.context(), institute_id)
        .await?;

    Ok(Json(MessageResponse::new("Successfully left the institute.")))
}
