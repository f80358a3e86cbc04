pub mod links;
pub mod service;

pub use links::SecureLinkIssuer;
pub use service::{DocumentService, DocumentUpload, UploadOutcome};
