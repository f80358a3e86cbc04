//! Concrete repository implementations, one per aggregate.

pub mod connection;
pub mod document;
pub mod group;
pub mod institute;
pub mod user;

pub use connection::ConnectionRepository;
pub use document::DocumentRepository;
pub use group::GroupRepository;
pub use institute::InstituteRepository;
pub use user::UserRepository;
