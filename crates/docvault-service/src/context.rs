//! Request context carrying the authenticated identity and role.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docvault_core::error::AppError;
use docvault_entity::Role;

/// Context for the current authenticated request.
///
/// Extracted from the session token and passed into service methods so
/// that every operation knows *who* is acting and in which role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user or institute id.
    pub principal_id: Uuid,
    /// The identity kind at token issuance.
    pub role: Role,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(principal_id: Uuid, role: Role) -> Self {
        Self { principal_id, role }
    }

    /// Returns the principal id if the caller is a user.
    pub fn require_user(&self) -> Result<Uuid, AppError> {
        match self.role {
            Role::User => Ok(self.principal_id),
            Role::Institute => Err(AppError::forbidden("Forbidden: User access required")),
        }
    }

    /// Returns the principal id if the caller is an institute.
    pub fn require_institute(&self) -> Result<Uuid, AppError> {
        match self.role {
            Role::Institute => Ok(self.principal_id),
            Role::User => Err(AppError::forbidden("Forbidden: Institute access required")),
        }
    }
}
