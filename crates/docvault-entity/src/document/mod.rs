//! Document entities.

pub mod model;

pub use model::{CreateDocument, Document, Recipient, SecureLink};
