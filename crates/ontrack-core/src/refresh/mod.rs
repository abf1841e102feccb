//! Refresh cycles and the timeline host loop.
//!
//! - [`RefreshScheduler`] - One fetch, one snapshot, one "not before" time
//! - [`TimelineHost`] - Re-runs the scheduler on its cadence and on manual reload
//! - [`ReloadHandle`] - The "Reload" action: run every timeline again now

pub mod handler;
pub mod host;
pub mod types;

pub use handler::{RefreshScheduler, default_interval};
pub use host::{ReloadHandle, TimelineHost};
pub use types::{CycleOutcome, CycleState, CycleTrigger, RefreshPolicy, Timeline, TimelineEntry};
