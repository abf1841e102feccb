//! Statistics source trait definition.

use crate::stats::{BudgetStat, FetchError};
use std::future::Future;

/// Anything that can produce one [`BudgetStat`] per call.
///
/// The refresh scheduler only depends on this trait, so cycles can be
/// driven by the HTTP [`StatFetcher`](crate::stats::StatFetcher) or by a
/// fixed value.
pub trait StatSource: Send + Sync {
    /// Perform exactly one fetch. Implementations must not retry or cache.
    fn fetch(&self) -> impl Future<Output = Result<BudgetStat, FetchError>> + Send;
}

/// A fixed statistic, for previews and offline rendering.
impl StatSource for BudgetStat {
    async fn fetch(&self) -> Result<BudgetStat, FetchError> {
        Ok(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl StatSource for FailingSource {
        async fn fetch(&self) -> Result<BudgetStat, FetchError> {
            Err(FetchError::Empty)
        }
    }

    #[tokio::test]
    async fn test_fixed_stat_source() {
        let stat = BudgetStat::sample();
        assert_eq!(stat.fetch().await.unwrap(), stat);
    }

    #[tokio::test]
    async fn test_failing_source() {
        assert!(matches!(FailingSource.fetch().await, Err(FetchError::Empty)));
    }
}
