use crate::geometry::DisplaySnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress of a single refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleState {
    Idle,
    Fetching,
    Rendered,
    RenderedWithFallback,
}

/// How a finished cycle obtained its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleOutcome {
    /// Fetched statistics were transformed.
    Rendered,
    /// The fetch failed or the budget was zero; the placeholder is shown.
    RenderedWithFallback,
}

impl From<CycleOutcome> for CycleState {
    fn from(outcome: CycleOutcome) -> Self {
        match outcome {
            CycleOutcome::Rendered => CycleState::Rendered,
            CycleOutcome::RenderedWithFallback => CycleState::RenderedWithFallback,
        }
    }
}

/// What started a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleTrigger {
    /// The cadence reached its next eligible time.
    Scheduled,
    /// The user asked for a reload.
    Manual,
}

/// When the host may run the next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "date", rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Not before the given time.
    After(DateTime<Utc>),
}

/// One renderable state, stamped with the time its cycle started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: DateTime<Utc>,
    pub snapshot: DisplaySnapshot,
    pub outcome: CycleOutcome,
}

impl TimelineEntry {
    pub fn placeholder(date: DateTime<Utc>) -> Self {
        Self {
            date,
            snapshot: DisplaySnapshot::placeholder(),
            outcome: CycleOutcome::RenderedWithFallback,
        }
    }
}

/// The result of a refresh cycle, handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub policy: RefreshPolicy,
}

impl Timeline {
    pub fn next_eligible(&self) -> DateTime<Utc> {
        match self.policy {
            RefreshPolicy::After(date) => date,
        }
    }

    /// The entry to display. Cycles always produce exactly one.
    pub fn current(&self) -> Option<&TimelineEntry> {
        self.entries.first()
    }
}
