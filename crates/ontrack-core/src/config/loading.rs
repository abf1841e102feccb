//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.ontrack/config.toml`
//! 3. **Project config** - `./.ontrack/config.toml`
//! 4. **Environment** - `ONTRACK_ENDPOINT_URL`, `ONTRACK_AUTH_TOKEN`
//! 5. **CLI arguments** - applied by the caller through [`apply_overrides`]

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{EndpointConfig, OnTrackConfig, RefreshConfig};
use crate::config::validation::{validate_config, validate_url};
use crate::errors::ConfigError;
use crate::stats::Endpoint;
use std::fs;
use std::path::Path;

pub const ENDPOINT_URL_ENV: &str = "ONTRACK_ENDPOINT_URL";
pub const AUTH_TOKEN_ENV: &str = "ONTRACK_AUTH_TOKEN";

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }
    matches!(
        e.downcast_ref::<ConfigError>(),
        Some(ConfigError::ConfigNotFound { .. })
    )
}

/// Load configuration from the hierarchy of config files and environment.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<OnTrackConfig, Box<dyn std::error::Error>> {
    let mut config = OnTrackConfig::default();

    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    let config = apply_overrides(
        config,
        std::env::var(ENDPOINT_URL_ENV).ok(),
        std::env::var(AUTH_TOKEN_ENV).ok(),
    );

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.ontrack/config.toml.
fn load_user_config() -> Result<OnTrackConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
    Ok(load_config_file(&config_path)?)
}

/// Load the project configuration from ./.ontrack/config.toml.
fn load_project_config() -> Result<OnTrackConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME);
    Ok(load_config_file(&config_path)?)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<OnTrackConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: OnTrackConfig, override_config: OnTrackConfig) -> OnTrackConfig {
    OnTrackConfig {
        endpoint: EndpointConfig {
            url: override_config.endpoint.url.or(base.endpoint.url),
            auth_token: override_config
                .endpoint
                .auth_token
                .or(base.endpoint.auth_token),
        },
        refresh: RefreshConfig {
            interval_minutes: override_config
                .refresh
                .interval_minutes
                .or(base.refresh.interval_minutes),
        },
    }
}

/// Apply endpoint overrides from the environment or command line.
///
/// Empty strings are treated as unset.
pub fn apply_overrides(
    mut config: OnTrackConfig,
    url: Option<String>,
    auth_token: Option<String>,
) -> OnTrackConfig {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        config.endpoint.url = Some(url);
    }
    if let Some(token) = auth_token.filter(|t| !t.trim().is_empty()) {
        config.endpoint.auth_token = Some(token);
    }
    config
}

/// Resolve the endpoint the fetcher should call.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when no URL is configured,
/// `ConfigError::InvalidEndpoint` for a non-HTTP URL, and
/// `ConfigError::MissingToken` when no token is configured.
pub fn resolve_endpoint(config: &OnTrackConfig) -> Result<Endpoint, ConfigError> {
    let url = config
        .endpoint
        .url
        .as_deref()
        .ok_or_else(|| ConfigError::InvalidConfiguration {
            message: format!(
                "No endpoint URL configured. Set [endpoint] url, {} or --url",
                ENDPOINT_URL_ENV
            ),
        })?;
    validate_url(url)?;

    let auth_token = config
        .endpoint
        .auth_token
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(ConfigError::MissingToken)?;

    Ok(Endpoint::new(url, auth_token))
}
