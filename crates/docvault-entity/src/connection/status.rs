//! Connection status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a user ↔ institute connection record.
///
/// Lifecycle: a record is created as `Pending`; the institute moves it to
/// `Approved` or `Rejected`. A rejected record blocks new requests until
/// the institute deletes it, returning the pair to the absent state. An
/// approved record is deleted when the user leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "connection_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Awaiting a decision by the institute.
    Pending,
    /// The user is linked to the institute.
    Approved,
    /// The request was declined; blocks re-requests until cleared.
    Rejected,
}

impl ConnectionStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConnectionStatus {
    type Err = docvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(docvault_core::AppError::validation(format!(
                "Invalid connection status: '{s}'"
            ))),
        }
    }
}
