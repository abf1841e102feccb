//! Configuration type definitions for OnTrack.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a partial file merges cleanly over the defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [endpoint]
//! url = "https://budget.example.com/budget_stat"
//! auth_token = "opaque-token"
//!
//! [refresh]
//! interval_minutes = 15
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.ontrack/config.toml`
/// 2. Project config: `./.ontrack/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OnTrackConfig {
    /// Remote budget statistics endpoint
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Timeline refresh cadence
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// Where budget statistics are fetched from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EndpointConfig {
    /// Full URL of the `budget_stat` resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Opaque token sent verbatim in the `Auth-Token` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

/// Refresh cadence configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefreshConfig {
    /// Minutes between scheduled refresh cycles.
    /// Default: 15 minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_minutes: Option<u64>,
}
