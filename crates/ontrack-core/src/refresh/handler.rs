use crate::config::defaults::DEFAULT_REFRESH_INTERVAL_MINUTES;
use crate::geometry::{self, DisplaySnapshot};
use crate::refresh::types::{CycleOutcome, CycleState, RefreshPolicy, Timeline, TimelineEntry};
use crate::stats::StatSource;
use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

/// Minimum time between scheduled cycles when nothing is configured.
pub fn default_interval() -> Duration {
    Duration::minutes(DEFAULT_REFRESH_INTERVAL_MINUTES as i64)
}

/// Runs refresh cycles against a [`StatSource`].
///
/// Holds no state across cycles: each call fetches once and derives a
/// fresh snapshot.
#[derive(Debug)]
pub struct RefreshScheduler<S> {
    source: S,
    interval: Duration,
}

impl<S: StatSource> RefreshScheduler<S> {
    pub fn new(source: S) -> Self {
        Self::with_interval(source, default_interval())
    }

    pub fn with_interval(source: S, interval: Duration) -> Self {
        Self { source, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Earliest time a cycle started at `now` allows the next one.
    pub fn next_eligible(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.interval
    }

    /// Run one refresh cycle.
    ///
    /// Fetches exactly once. Success and failure both yield a single entry
    /// stamped `now` and the same `After(now + interval)` policy.
    pub async fn timeline(&self, now: DateTime<Utc>) -> Timeline {
        let next_eligible = self.next_eligible(now);
        log_state(CycleState::Idle, now);
        log_state(CycleState::Fetching, now);

        let (snapshot, outcome) = match self.source.fetch().await {
            Ok(stat) => match geometry::transform(&stat) {
                Ok(snapshot) => (snapshot, CycleOutcome::Rendered),
                Err(e) => {
                    warn!(
                        event = "core.refresh.fallback_used",
                        reason = "geometry",
                        error = %e
                    );
                    (DisplaySnapshot::placeholder(), CycleOutcome::RenderedWithFallback)
                }
            },
            Err(e) => {
                warn!(
                    event = "core.refresh.fallback_used",
                    reason = "fetch",
                    error = %e
                );
                (DisplaySnapshot::placeholder(), CycleOutcome::RenderedWithFallback)
            }
        };

        log_state(outcome.into(), now);
        info!(
            event = "core.refresh.cycle_completed",
            outcome = ?outcome,
            next_eligible = %next_eligible
        );

        Timeline {
            entries: vec![TimelineEntry {
                date: now,
                snapshot,
                outcome,
            }],
            policy: RefreshPolicy::After(next_eligible),
        }
    }

    /// Entry shown before any data exists. Never fetches.
    pub fn placeholder(&self, now: DateTime<Utc>) -> TimelineEntry {
        TimelineEntry::placeholder(now)
    }

    /// Quick entry for transient previews (e.g. a widget gallery). Never fetches.
    pub fn snapshot(&self, now: DateTime<Utc>) -> TimelineEntry {
        TimelineEntry::placeholder(now)
    }
}

fn log_state(state: CycleState, started_at: DateTime<Utc>) {
    info!(
        event = "core.refresh.state_changed",
        state = ?state,
        cycle_started_at = %started_at
    );
}
