//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User signup body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserSignupRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Password; the minimum length policy is enforced by the auth service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Institute signup body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InstituteSignupRequest {
    /// Institute name.
    #[validate(length(min = 1, message = "Institute name is required"))]
    pub name: String,
    /// Administrator email.
    #[validate(email(message = "Please include a valid email"))]
    pub admin_email: String,
    /// Password; the minimum length policy is enforced by the auth service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Administrator contact name.
    pub admin_name: Option<String>,
}

/// Login body, shared by both roles.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Group creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    /// Group name.
    #[validate(length(min = 1, message = "Group name is required"))]
    pub name: String,
    /// Initial members; all must be linked users.
    #[serde(default)]
    pub member_ids: Vec<Uuid>,
}

/// Group membership replacement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetGroupMembersRequest {
    /// Replacement member set; all must be linked users.
    pub member_ids: Vec<Uuid>,
}
