//! The connection state machine: absent → pending → {approved, rejected},
//! rejected → absent via explicit clearing.
//!
//! Membership lists are never written here. Both directions ("a user's
//! institutes", "an institute's users") are derived from approved records,
//! so every transition is a single-row statement and there is no partial
//! state to observe.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use docvault_core::error::AppError;
use docvault_database::repositories::connection::ConnectionRepository;
use docvault_database::repositories::institute::InstituteRepository;
use docvault_database::repositories::user::UserRepository;
use docvault_entity::connection::{ConnectionRequest, ConnectionStatus};
use docvault_entity::institute::InstituteProfile;
use docvault_entity::user::UserProfile;

use crate::context::RequestContext;

/// Manages join requests and membership between users and institutes.
#[derive(Debug, Clone)]
pub struct ConnectionService {
    connection_repo: Arc<ConnectionRepository>,
    user_repo: Arc<UserRepository>,
    institute_repo: Arc<InstituteRepository>,
}

impl ConnectionService {
    /// Creates a new connection service.
    pub fn new(
        connection_repo: Arc<ConnectionRepository>,
        user_repo: Arc<UserRepository>,
        institute_repo: Arc<InstituteRepository>,
    ) -> Self {
        Self {
            connection_repo,
            user_repo,
            institute_repo,
        }
    }

    /// A user requests to join an institute.
    ///
    /// Returns the institute name for the confirmation message.
    pub async fn request_join(
        &self,
        ctx: &RequestContext,
        institute_id: Uuid,
    ) -> Result<String, AppError> {
        let user_id = ctx.require_user()?;

        let institute = self
            .institute_repo
            .find_by_id(institute_id)
            .await?
            .ok_or_else(|| AppError::not_found("Institute not found"))?;

        if let Some(existing) = self.connection_repo.find_pair(user_id, institute_id).await? {
            return Err(match existing.status {
                ConnectionStatus::Approved => {
                    AppError::conflict("You are already linked to this institute.")
                }
                ConnectionStatus::Pending => {
                    AppError::conflict("You already have a pending request for this institute.")
                }
                ConnectionStatus::Rejected => AppError::forbidden(
                    "Your request to this institute has been previously rejected. \
                     Please contact the administrator.",
                ),
            });
        }

        // The unique index backstops the check above: a concurrent
        // duplicate insert comes back as Conflict from the repository.
        self.connection_repo
            .create_pending(user_id, institute_id)
            .await?;

        info!(%user_id, %institute_id, "Join request created");
        Ok(institute.name)
    }

    /// A user leaves an institute.
    ///
    /// Deletes the approved record for the pair; both derived membership
    /// views update with it. Idempotent: leaving an institute the user is
    /// not linked to still succeeds.
    pub async fn leave(&self, ctx: &RequestContext, institute_id: Uuid) -> Result<(), AppError> {
        let user_id = ctx.require_user()?;

        let removed = self
            .connection_repo
            .delete_with_status(user_id, institute_id, ConnectionStatus::Approved)
            .await?;

        if removed {
            info!(%user_id, %institute_id, "User left institute");
        }
        Ok(())
    }

    /// The institute approves a pending request.
    ///
    /// Fails with `NotFound` if no pending record exists for the pair —
    /// including a second approve on an already-decided record.
    pub async fn approve(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        let institute_id = ctx.require_institute()?;

        self.connection_repo
            .decide(user_id, institute_id, ConnectionStatus::Approved)
            .await?
            .ok_or_else(|| AppError::not_found("Pending request not found."))?;

        info!(%user_id, %institute_id, "Join request approved");
        Ok(())
    }

    /// The institute rejects a pending request.
    ///
    /// The record is kept with rejected status so the pair stays blocked
    /// until the institute clears it.
    pub async fn reject(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        let institute_id = ctx.require_institute()?;

        self.connection_repo
            .decide(user_id, institute_id, ConnectionStatus::Rejected)
            .await?
            .ok_or_else(|| AppError::not_found("Pending request not found."))?;

        info!(%user_id, %institute_id, "Join request rejected");
        Ok(())
    }

    /// The institute deletes a rejected record, returning the pair to the
    /// absent state so the user may request again.
    pub async fn clear_rejected(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        let institute_id = ctx.require_institute()?;

        let removed = self
            .connection_repo
            .delete_with_status(user_id, institute_id, ConnectionStatus::Rejected)
            .await?;

        if !removed {
            return Err(AppError::not_found("Rejected record not found."));
        }

        info!(%user_id, %institute_id, "Rejected record cleared");
        Ok(())
    }

    /// Pending requests for the calling institute, with requester profiles.
    pub async fn list_pending(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<ConnectionRequest>, AppError> {
        let institute_id = ctx.require_institute()?;
        self.connection_repo
            .list_for_institute(institute_id, ConnectionStatus::Pending)
            .await
    }

    /// Rejected requests for the calling institute, with requester profiles.
    pub async fn list_rejected(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<ConnectionRequest>, AppError> {
        let institute_id = ctx.require_institute()?;
        self.connection_repo
            .list_for_institute(institute_id, ConnectionStatus::Rejected)
            .await
    }

    /// Institutes the calling user is linked to.
    pub async fn connected_institutes(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<InstituteProfile>, AppError> {
        let user_id = ctx.require_user()?;
        self.user_repo.connected_institutes(user_id).await
    }

    /// Users linked to the calling institute.
    pub async fn linked_users(&self, ctx: &RequestContext) -> Result<Vec<UserProfile>, AppError> {
        let institute_id = ctx.require_institute()?;
        self.institute_repo.linked_users(institute_id).await
    }
}
