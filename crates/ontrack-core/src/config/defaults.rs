//! Default values for configuration types.

use crate::config::types::RefreshConfig;
use chrono::Duration;

/// Minutes between refresh cycles when nothing is configured.
pub const DEFAULT_REFRESH_INTERVAL_MINUTES: u64 = 15;

/// Upper bound for a configured refresh interval (one day).
pub const MAX_REFRESH_INTERVAL_MINUTES: u64 = 24 * 60;

/// Name of the per-user and per-directory config folder.
pub const CONFIG_DIR_NAME: &str = ".ontrack";

/// Name of the config file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

impl RefreshConfig {
    /// Returns the refresh interval in minutes, defaulting to 15.
    pub fn interval_minutes(&self) -> u64 {
        self.interval_minutes.unwrap_or(DEFAULT_REFRESH_INTERVAL_MINUTES)
    }

    /// Returns the refresh interval as a chrono duration, capped at one day.
    pub fn interval(&self) -> Duration {
        let minutes = self.interval_minutes().min(MAX_REFRESH_INTERVAL_MINUTES);
        Duration::minutes(minutes as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OnTrackConfig;

    #[test]
    fn test_ontrack_config_default() {
        let config = OnTrackConfig::default();
        assert!(config.endpoint.url.is_none());
        assert!(config.endpoint.auth_token.is_none());
        assert_eq!(config.refresh.interval_minutes(), 15);
    }

    #[test]
    fn test_refresh_interval_duration() {
        let config = RefreshConfig::default();
        assert_eq!(config.interval(), Duration::minutes(15));

        let config = RefreshConfig {
            interval_minutes: Some(30),
        };
        assert_eq!(config.interval(), Duration::minutes(30));
    }

    #[test]
    fn test_refresh_config_serde_defaults() {
        let toml_str = r#"
[endpoint]
url = "https://budget.example.com/budget_stat"
"#;
        let config: OnTrackConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(
            config.refresh.interval_minutes(),
            15,
            "interval should default to 15 when refresh section is missing"
        );
        assert_eq!(
            config.endpoint.url.as_deref(),
            Some("https://budget.example.com/budget_stat")
        );
    }
}
