//! Configuration validation logic.

use crate::config::defaults::MAX_REFRESH_INTERVAL_MINUTES;
use crate::config::types::OnTrackConfig;
use crate::errors::ConfigError;

/// Validate an OnTrackConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Endpoint URL, if set, must use the http or https scheme
/// - Refresh interval, if set, must be between 1 and 1440 minutes
///
/// A missing URL or token is not a validation error here: commands that
/// never touch the network (`preview`, `render --sample`) run without them.
pub fn validate_config(config: &OnTrackConfig) -> Result<(), ConfigError> {
    if let Some(ref url) = config.endpoint.url {
        validate_url(url)?;
    }

    if let Some(minutes) = config.refresh.interval_minutes
        && !(1..=MAX_REFRESH_INTERVAL_MINUTES).contains(&minutes)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "refresh.interval_minutes must be between 1 and {}, got {}",
                MAX_REFRESH_INTERVAL_MINUTES, minutes
            ),
        });
    }

    Ok(())
}

/// Check that a URL uses a scheme reqwest can fetch.
pub fn validate_url(url: &str) -> Result<(), ConfigError> {
    let trimmed = url.trim();
    let has_host = |rest: &str| !rest.is_empty() && !rest.starts_with('/');

    match trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
    {
        Some(rest) if has_host(rest) => Ok(()),
        _ => Err(ConfigError::InvalidEndpoint {
            url: url.to_string(),
        }),
    }
}
