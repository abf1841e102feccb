//! ontrack-core: Budget statistics widget engine
//!
//! Fetches budget statistics from a remote endpoint, turns them into ring
//! geometry and labels, and schedules the next refresh. Used by the CLI host.
//!
//! # Main Entry Points
//!
//! - [`stats`] - Fetch and decode `budget_stat`
//! - [`geometry`] - Statistics to arc fractions and labels
//! - [`render`] - Snapshot to drawable primitives
//! - [`refresh`] - Refresh cycles and the timeline host
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod logging;
pub mod refresh;
pub mod render;
pub mod stats;

// Re-export commonly used types at crate root for convenience
pub use config::OnTrackConfig;
pub use errors::{ConfigError, OnTrackError};
pub use geometry::{DeviationColor, DisplaySnapshot, GeometryError};
pub use refresh::{
    CycleOutcome, RefreshPolicy, RefreshScheduler, ReloadHandle, Timeline, TimelineEntry,
    TimelineHost,
};
pub use render::{Drawable, WidgetScene};
pub use stats::{BudgetStat, Endpoint, FetchError, StatFetcher, StatSource};

// Re-export logging initialization
pub use logging::init_logging;
