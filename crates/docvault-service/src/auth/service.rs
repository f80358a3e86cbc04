//! Signup and login for both identity kinds.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use docvault_auth::jwt::encoder::JwtEncoder;
use docvault_auth::password::hasher::PasswordHasher;
use docvault_core::error::{AppError, FieldError};
use docvault_database::repositories::institute::InstituteRepository;
use docvault_database::repositories::user::UserRepository;
use docvault_entity::Role;
use docvault_entity::institute::CreateInstitute;
use docvault_entity::user::CreateUser;

/// A freshly issued session token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionToken {
    /// The signed token string.
    pub token: String,
    /// The role embedded in the token.
    pub role: Role,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Validates credentials and issues session tokens.
///
/// The two identity kinds share the token shape but live in different
/// tables; `Role` is matched to the corresponding repository here, once,
/// instead of string-branching in handlers.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    institute_repo: Arc<InstituteRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    password_min_length: usize,
}

impl AuthService {
    /// Creates a new auth service.
    ///
    /// `password_min_length` is the signup password policy from
    /// configuration; login accepts whatever was stored.
    pub fn new(
        user_repo: Arc<UserRepository>,
        institute_repo: Arc<InstituteRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        password_min_length: usize,
    ) -> Self {
        Self {
            user_repo,
            institute_repo,
            hasher,
            encoder,
            password_min_length,
        }
    }

    /// Registers a user account and issues its first session token.
    ///
    /// Fails with `Conflict` if the email is already taken.
    pub async fn signup_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionToken, AppError> {
        self.check_password_policy(password)?;
        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        self.issue(user.id, Role::User)
    }

    /// Registers an institute and issues its first session token.
    ///
    /// Fails with `Conflict` if the admin email or institute name is taken.
    pub async fn signup_institute(
        &self,
        name: &str,
        admin_email: &str,
        password: &str,
        admin_name: Option<&str>,
    ) -> Result<SessionToken, AppError> {
        self.check_password_policy(password)?;
        let password_hash = self.hasher.hash_password(password)?;
        let institute = self
            .institute_repo
            .create(&CreateInstitute {
                name: name.to_string(),
                admin_name: admin_name.map(String::from),
                admin_email: admin_email.to_string(),
                password_hash,
            })
            .await?;

        info!(institute_id = %institute.id, "Institute registered");
        self.issue(institute.id, Role::Institute)
    }

    /// Authenticates credentials for the given role and issues a token.
    ///
    /// Unknown identity and wrong password both fail with the same
    /// `Unauthorized` message.
    pub async fn login(
        &self,
        role: Role,
        email: &str,
        password: &str,
    ) -> Result<SessionToken, AppError> {
        let (id, password_hash) = match role {
            Role::User => {
                let user = self
                    .user_repo
                    .find_by_email(email)
                    .await?
                    .ok_or_else(|| AppError::unauthorized("Invalid Credentials"))?;
                (user.id, user.password_hash)
            }
            Role::Institute => {
                let institute = self
                    .institute_repo
                    .find_by_admin_email(email)
                    .await?
                    .ok_or_else(|| AppError::unauthorized("Invalid Credentials"))?;
                (institute.id, institute.password_hash)
            }
        };

        if !self.hasher.verify_password(password, &password_hash)? {
            return Err(AppError::unauthorized("Invalid Credentials"));
        }

        info!(principal_id = %id, role = %role, "Login succeeded");
        self.issue(id, role)
    }

    fn check_password_policy(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.password_min_length {
            return Err(AppError::validation_fields(vec![FieldError {
                field: "password".to_string(),
                message: format!(
                    "Password must be {} or more characters",
                    self.password_min_length
                ),
            }]));
        }
        Ok(())
    }

    fn issue(&self, id: uuid::Uuid, role: Role) -> Result<SessionToken, AppError> {
        let (token, expires_at) = self.encoder.generate_session_token(id, role)?;
        Ok(SessionToken {
            token,
            role,
            expires_at,
        })
    }
}
