//! # docvault-entity
//!
//! Domain entity models for DocVault: users, institutes, groups,
//! connection records, documents, and the role enum shared by the
//! authentication layer.

pub mod connection;
pub mod document;
pub mod group;
pub mod institute;
pub mod role;
pub mod user;

pub use connection::{Connection, ConnectionRequest, ConnectionStatus};
pub use document::{Document, SecureLink};
pub use group::Group;
pub use institute::{Institute, InstituteProfile};
pub use role::Role;
pub use user::{User, UserProfile};
