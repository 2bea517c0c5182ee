//! Configuration for pattern-list fetching.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Seconds to wait for a remote pattern list before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the HTTP fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// HTTP statuses treated as a successful read.
    pub accepted_statuses: Vec<u16>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accepted_statuses: vec![200, 304],
        }
    }
}

impl LoaderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn accepts(&self, status: u16) -> bool {
        self.accepted_statuses.contains(&status)
    }
}
