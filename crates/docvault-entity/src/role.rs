//! Identity role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two identity kinds that authenticate against the API.
///
/// Both share the same token shape but are stored in different tables;
/// the auth service resolves the kind to a repository once at the
/// boundary instead of branching on strings inside handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// An individual account that joins institutes and receives documents.
    User,
    /// A tenant organization that uploads documents and manages groups.
    Institute,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Institute => "institute",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = docvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "institute" => Ok(Self::Institute),
            _ => Err(docvault_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: user, institute"
            ))),
        }
    }
}
