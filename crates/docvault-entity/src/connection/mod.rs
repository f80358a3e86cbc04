//! Connection lifecycle entities.

pub mod model;
pub mod status;

pub use model::{Connection, ConnectionRequest};
pub use status::ConnectionStatus;
