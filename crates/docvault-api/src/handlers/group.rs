//! Group management handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use docvault_entity::group::Group;
use docvault_entity::user::UserProfile;

use crate::dto::request::{CreateGroupRequest, SetGroupMembersRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// POST /api/dashboard/institute/groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Json<Group>, ApiError> {
    crate::dto::validate(&req)?;

    let group = state
        .group_service
        .create(auth.context(), req.name, req.member_ids)
        .await?;
    Ok(Json(group))
}

/// GET /api/dashboard/institute/groups
pub async fn list_groups(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = state.group_service.list(auth.context()).await?;
    Ok(Json(groups))
}

/// GET /api/dashboard/institute/groups/{groupId}/members
pub async fn group_members(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let members = state.group_service.members(auth.context(), group_id).await?;
    Ok(Json(members))
}

/// PUT /api/dashboard/institute/groups/{groupId}/members
pub async fn set_group_members(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(group_id): Path<Uuid>,
    Json(req): Json<SetGroupMembersRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .group_service
        .set_members(auth.context(), group_id, req.member_ids)
        .await?;
    Ok(Json(MessageResponse::new("Group membership updated.")))
}
