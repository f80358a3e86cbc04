//! # docvault-service
//!
//! Business logic for DocVault. Services orchestrate repositories, the
//! token layer, and the document store; handlers stay thin.

pub mod auth;
pub mod connection;
pub mod context;
pub mod document;
pub mod group;
pub mod storage;

pub use context::RequestContext;
