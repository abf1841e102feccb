//! Timeline host loop.
//!
//! Stands in for the platform's widget refresh infrastructure: it runs a
//! cycle as soon as it starts, then again each time the cadence reaches
//! `next_eligible`, and immediately whenever [`ReloadHandle::reload_all_timelines`]
//! is called.
//!
//! Every cycle runs as its own task and publishes into a watch channel.
//! In-flight cycles are never cancelled, so when cycles overlap the last
//! response to arrive wins.

use crate::refresh::handler::RefreshScheduler;
use crate::refresh::types::{CycleTrigger, Timeline};
use crate::stats::StatSource;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Notify, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// The manual "Reload" action. Cheap to clone; carries no parameters.
#[derive(Debug, Clone)]
pub struct ReloadHandle {
    notify: Arc<Notify>,
}

impl ReloadHandle {
    /// Ask the host to run every timeline again right away.
    ///
    /// Does not move the scheduled cadence. Requests made before the host
    /// next polls coalesce into a single cycle.
    pub fn reload_all_timelines(&self) {
        info!(event = "core.refresh.reload_requested");
        self.notify.notify_one();
    }
}

pub struct TimelineHost<S> {
    scheduler: Arc<RefreshScheduler<S>>,
    reload: Arc<Notify>,
    shutdown: CancellationToken,
    latest: Arc<watch::Sender<Option<Timeline>>>,
}

impl<S: StatSource + 'static> TimelineHost<S> {
    pub fn new(scheduler: RefreshScheduler<S>) -> Self {
        let (latest, _) = watch::channel(None);
        Self {
            scheduler: Arc::new(scheduler),
            reload: Arc::new(Notify::new()),
            shutdown: CancellationToken::new(),
            latest: Arc::new(latest),
        }
    }

    pub fn reload_handle(&self) -> ReloadHandle {
        ReloadHandle {
            notify: self.reload.clone(),
        }
    }

    /// Token that stops [`TimelineHost::run`] when cancelled.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Receive every published timeline. Starts at `None`.
    pub fn subscribe(&self) -> watch::Receiver<Option<Timeline>> {
        self.latest.subscribe()
    }

    /// Drive the cadence until the shutdown token is cancelled.
    pub async fn run(self) {
        info!(
            event = "core.refresh.host_started",
            interval_secs = self.scheduler.interval().num_seconds()
        );

        let mut next_eligible = Utc::now();

        loop {
            let wait = (next_eligible - Utc::now())
                .to_std()
                .unwrap_or(std::time::Duration::ZERO);

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    break;
                }
                _ = tokio::time::sleep(wait) => {
                    let now = Utc::now();
                    next_eligible = self.scheduler.next_eligible(now);
                    self.spawn_cycle(CycleTrigger::Scheduled);
                }
                _ = self.reload.notified() => {
                    self.spawn_cycle(CycleTrigger::Manual);
                }
            }
        }

        info!(event = "core.refresh.host_stopped");
    }

    fn spawn_cycle(&self, trigger: CycleTrigger) {
        let scheduler = self.scheduler.clone();
        let latest = self.latest.clone();
        let now = Utc::now();

        debug!(event = "core.refresh.cycle_spawned", trigger = ?trigger, now = %now);

        tokio::spawn(async move {
            let timeline = scheduler.timeline(now).await;
            latest.send_replace(Some(timeline));
        });
    }
}
