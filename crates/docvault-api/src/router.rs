//! Route definitions for the DocVault HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_dashboard_routes())
        .merge(institute_dashboard_routes())
        .merge(document_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup and login for both roles
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/user/signup", post(handlers::auth::user_signup))
        .route(
            "/auth/institute/signup",
            post(handlers::auth::institute_signup),
        )
        .route("/auth/{role}/login", post(handlers::auth::login))
}

/// Membership seen from the user's side
fn user_dashboard_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/dashboard/user/institutes",
            get(handlers::user::connected_institutes),
        )
        .route(
            "/dashboard/user/join/{institute_id}",
            post(handlers::user::request_join),
        )
        .route(
            "/dashboard/user/leave/{institute_id}",
            post(handlers::user::leave),
        )
}

/// Membership and groups seen from the institute's side
fn institute_dashboard_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/dashboard/institute/linked-users",
            get(handlers::institute::linked_users),
        )
        .route(
            "/dashboard/institute/pending",
            get(handlers::institute::pending_requests),
        )
        .route(
            "/dashboard/institute/rejected",
            get(handlers::institute::rejected_requests),
        )
        .route(
            "/dashboard/institute/approve/{user_id}",
            put(handlers::institute::approve),
        )
        .route(
            "/dashboard/institute/reject/{user_id}",
            put(handlers::institute::reject),
        )
        .route(
            "/dashboard/institute/rejected/{user_id}",
            delete(handlers::institute::clear_rejected),
        )
        .route(
            "/dashboard/institute/groups",
            post(handlers::group::create_group).get(handlers::group::list_groups),
        )
        .route(
            "/dashboard/institute/groups/{group_id}/members",
            get(handlers::group::group_members).put(handlers::group::set_group_members),
        )
}

/// Document upload and history
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents/upload", post(handlers::document::upload))
        .route("/documents", get(handlers::document::list))
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// CORS policy from configuration. `*` means any origin.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(parsed)
    }
}
