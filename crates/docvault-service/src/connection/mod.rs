//! Connection lifecycle management.

pub mod service;

pub use service::ConnectionService;
