//! Identity and session issuance.

pub mod service;

pub use service::{AuthService, SessionToken};
