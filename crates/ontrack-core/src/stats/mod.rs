//! Budget statistics: the wire record and the HTTP source that produces it.
//!
//! - [`BudgetStat`] - Flat record decoded from the `budget_stat` JSON object
//! - [`StatSource`] - Seam the refresh scheduler fetches through
//! - [`StatFetcher`] - One GET per call, `Auth-Token` header, no retries
//! - [`FetchError`] - Transport, decode and empty-body failures

pub mod errors;
pub mod fetcher;
pub mod traits;
pub mod types;

pub use errors::FetchError;
pub use fetcher::{AUTH_TOKEN_HEADER, StatFetcher, decode_budget_stat};
pub use traits::StatSource;
pub use types::{BudgetStat, Endpoint};
