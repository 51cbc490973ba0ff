//! Configuration for the `whois-rust` lookup backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_follow() -> u16 {
    2
}

const fn default_timeout_secs() -> u64 {
    10
}

/// Lookup backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupConfig {
    /// TLD to server map in `whois-rust` JSON format. `None` uses the embedded map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<String>,

    /// How many referrals to follow to a registrar's WHOIS server.
    #[serde(default = "default_follow")]
    pub follow: u16,

    /// Per-query timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LookupConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            servers: None,
            follow: default_follow(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
