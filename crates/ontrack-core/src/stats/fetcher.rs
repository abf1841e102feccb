//! Budget endpoint HTTP client.
//!
//! One GET per [`StatFetcher::fetch`] call. No retries, no caching, and the
//! transport's default timeout.

use crate::stats::{BudgetStat, Endpoint, FetchError, StatSource};
use tracing::{info, warn};

/// Header carrying the opaque static credential.
pub const AUTH_TOKEN_HEADER: &str = "Auth-Token";

/// Fetches [`BudgetStat`] from the configured endpoint.
#[derive(Debug, Clone)]
pub struct StatFetcher {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl StatFetcher {
    /// Create a fetcher for the given endpoint.
    pub fn new(endpoint: Endpoint) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("ontrack/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl StatSource for StatFetcher {
    async fn fetch(&self) -> Result<BudgetStat, FetchError> {
        info!(event = "core.stats.fetch_started", url = %self.endpoint.url);

        let response = self
            .http
            .get(&self.endpoint.url)
            .header(AUTH_TOKEN_HEADER, &self.endpoint.auth_token)
            .send()
            .await
            .map_err(|e| {
                warn!(event = "core.stats.fetch_failed", kind = "transport", error = %e);
                FetchError::Transport {
                    message: e.to_string(),
                }
            })?;

        // Status is not a failure on its own: whatever body came back is decoded.
        let status = response.status();
        if !status.is_success() {
            warn!(
                event = "core.stats.unexpected_status",
                status = status.as_u16()
            );
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(event = "core.stats.fetch_failed", kind = "transport", error = %e);
            FetchError::Transport {
                message: e.to_string(),
            }
        })?;

        let stat = decode_budget_stat(&body).inspect_err(|e| {
            warn!(event = "core.stats.fetch_failed", kind = "decode", error = %e);
        })?;

        info!(
            event = "core.stats.fetch_completed",
            status = status.as_u16(),
            budget_amount = stat.budget_amount,
            total_balance = stat.total_balance,
            balance_deviation = stat.balance_deviation
        );

        Ok(stat)
    }
}

/// Decode a `budget_stat` response body.
///
/// Missing keys become zero and unknown keys are ignored. A zero-length
/// body is reported as [`FetchError::Empty`] rather than a decode failure.
pub fn decode_budget_stat(body: &[u8]) -> Result<BudgetStat, FetchError> {
    if body.is_empty() {
        return Err(FetchError::Empty);
    }

    serde_json::from_slice(body).map_err(|e| FetchError::Decode {
        message: e.to_string(),
    })
}
