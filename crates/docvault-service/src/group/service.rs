use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use docvault_core::error::AppError;
use docvault_database::repositories::connection::ConnectionRepository;
use docvault_database::repositories::group::GroupRepository;
use docvault_entity::group::{CreateGroup, Group};
use docvault_entity::user::UserProfile;

use crate::context::RequestContext;

/// Manages an institute's recipient groups.
///
/// Group members must be users currently linked to the owning institute.
/// Membership is validated on every write; a user who later leaves the
/// institute simply stops appearing in expansions.
#[derive(Debug, Clone)]
pub struct GroupService {
    group_repo: Arc<GroupRepository>,
    connection_repo: Arc<ConnectionRepository>,
}

impl GroupService {
    /// Creates a new group service.
    pub fn new(group_repo: Arc<GroupRepository>, connection_repo: Arc<ConnectionRepository>) -> Self {
        Self {
            group_repo,
            connection_repo,
        }
    }

    /// Creates a group for the calling institute, seeded with the given
    /// members.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        member_ids: Vec<Uuid>,
    ) -> Result<Group, AppError> {
        let institute_id = ctx.require_institute()?;

        let members = self.verified_members(institute_id, member_ids).await?;
        let group = self
            .group_repo
            .create(&CreateGroup { institute_id, name })
            .await?;
        self.group_repo.replace_members(group.id, &members).await?;

        info!(group_id = %group.id, %institute_id, members = members.len(), "Group created");
        Ok(group)
    }

    /// Lists the calling institute's groups.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Group>, AppError> {
        let institute_id = ctx.require_institute()?;
        self.group_repo.list_by_institute(institute_id).await
    }

    /// Current members of one of the calling institute's groups.
    pub async fn members(
        &self,
        ctx: &RequestContext,
        group_id: Uuid,
    ) -> Result<Vec<UserProfile>, AppError> {
        let institute_id = ctx.require_institute()?;
        self.owned_group(institute_id, group_id).await?;
        self.group_repo.members(group_id).await
    }

    /// Replaces a group's membership wholesale.
    pub async fn set_members(
        &self,
        ctx: &RequestContext,
        group_id: Uuid,
        member_ids: Vec<Uuid>,
    ) -> Result<(), AppError> {
        let institute_id = ctx.require_institute()?;
        self.owned_group(institute_id, group_id).await?;

        let members = self.verified_members(institute_id, member_ids).await?;
        self.group_repo.replace_members(group_id, &members).await?;

        info!(%group_id, %institute_id, members = members.len(), "Group membership updated");
        Ok(())
    }

    async fn owned_group(&self, institute_id: Uuid, group_id: Uuid) -> Result<Group, AppError> {
        let group = self
            .group_repo
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| AppError::not_found("Group not found"))?;
        if group.institute_id != institute_id {
            return Err(AppError::not_found("Group not found"));
        }
        Ok(group)
    }

    /// Rejects member lists that name users not linked to the institute.
    async fn verified_members(
        &self,
        institute_id: Uuid,
        member_ids: Vec<Uuid>,
    ) -> Result<Vec<Uuid>, AppError> {
        if member_ids.is_empty() {
            return Ok(member_ids);
        }
        let linked = self
            .connection_repo
            .approved_subset(institute_id, &member_ids)
            .await?;
        if linked.len() != member_ids.iter().collect::<std::collections::HashSet<_>>().len() {
            return Err(AppError::validation(
                "All group members must be users linked to this institute",
            ));
        }
        Ok(member_ids)
    }
}
