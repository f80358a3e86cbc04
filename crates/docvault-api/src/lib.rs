//! # docvault-api
//!
//! HTTP API layer for DocVault built on Axum.
//!
//! Provides the REST endpoints, middleware (auth extraction, request
//! logging, CORS), DTOs, and error mapping onto the wire contract:
//! camelCase JSON, `x-auth-token` header, `{"msg": ...}` error bodies.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
