use serde::{Deserialize, Serialize};

/// Budget statistics as reported by the remote service.
///
/// Every key is optional on the wire: a missing key decodes to zero and
/// unknown keys are ignored. Only a mistyped value fails the decode.
///
/// Amounts are single precision. Labels are rounded from the `f32` value,
/// so `0.15` days reads as `"0.2"`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetStat {
    /// Budget for the current period, in account currency.
    pub budget_amount: f32,
    /// Period start, epoch seconds.
    pub budget_started_at: i64,
    /// Period end, epoch seconds.
    pub budget_expires_at: i64,
    /// Days left in the period. Fractional, negative once expired.
    pub budget_days_to_expiration: f32,
    pub account_balance: f32,
    pub cash_balance: f32,
    /// `account_balance + cash_balance`, taken as reported.
    pub total_balance: f32,
    /// Balance expected at this point of the period if spending were even.
    pub estimated_balance: f32,
    /// Positive when ahead of pace (under budget), negative when behind.
    pub balance_deviation: f32,
}

impl BudgetStat {
    /// Representative figures used for previews and demos.
    pub fn sample() -> Self {
        Self {
            budget_amount: 1000.0,
            budget_started_at: 0,
            budget_expires_at: 0,
            budget_days_to_expiration: 10.3,
            account_balance: 700.0,
            cash_balance: 100.0,
            total_balance: 800.0,
            estimated_balance: 700.0,
            balance_deviation: 20.0,
        }
    }
}

/// Resolved location and credential of the statistics endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub auth_token: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Host part of the URL, for logs. `None` when the URL does not parse.
    pub fn host(&self) -> Option<String> {
        reqwest::Url::parse(&self.url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_owned))
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}
