//! # Configuration System
//!
//! Hierarchical TOML configuration system for OnTrack.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.ontrack/config.toml` (global user preferences)
//! 3. **Project config** - `./.ontrack/config.toml` (directory-specific overrides)
//! 4. **Environment** - `ONTRACK_ENDPOINT_URL`, `ONTRACK_AUTH_TOKEN`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.ontrack/config.toml
//! [endpoint]
//! url = "https://budget.example.com/budget_stat"
//! auth_token = "d6154016-cd46-4235-ab40-7971a6a5ced7"
//!
//! [refresh]
//! interval_minutes = 15
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use ontrack_core::config::OnTrackConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OnTrackConfig::load_hierarchy()?;
//!     let endpoint = config.resolve_endpoint()?;
//!     println!("fetching from {}", endpoint.url);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{EndpointConfig, OnTrackConfig, RefreshConfig};
pub use validation::validate_config;

impl OnTrackConfig {
    /// Load configuration from the hierarchy of config files and environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Resolve the endpoint the fetcher should call.
    ///
    /// See [`loading::resolve_endpoint`] for details.
    pub fn resolve_endpoint(&self) -> Result<crate::stats::Endpoint, crate::errors::ConfigError> {
        loading::resolve_endpoint(self)
    }
}
