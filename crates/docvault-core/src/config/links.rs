//! Secure link configuration.

use serde::{Deserialize, Serialize};

/// Settings for issued document links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Public base URL the signed view tokens are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Expiry in days applied when an upload does not specify one.
    #[serde(default = "default_expiry_days")]
    pub default_expiry_days: i32,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_expiry_days: default_expiry_days(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_expiry_days() -> i32 {
    7
}
