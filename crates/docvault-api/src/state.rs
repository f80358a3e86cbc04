//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use docvault_auth::JwtDecoder;
use docvault_core::config::AppConfig;
use docvault_service::auth::AuthService;
use docvault_service::connection::ConnectionService;
use docvault_service::document::DocumentService;
use docvault_service::group::GroupService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Signup and login
    pub auth_service: Arc<AuthService>,
    /// Connection lifecycle and membership views
    pub connection_service: Arc<ConnectionService>,
    /// Recipient group management
    pub group_service: Arc<GroupService>,
    /// Upload orchestration and link issuance
    pub document_service: Arc<DocumentService>,
}
