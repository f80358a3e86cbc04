//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod document;
pub mod group;
pub mod health;
pub mod institute;
pub mod user;
