//! Session-level events emitted by the CLI host.

use crate::refresh::TimelineEntry;
use crate::stats::Endpoint;
use tracing::{error, info};

pub fn log_session_started(command: &str) {
    info!(
        event = "core.session.started",
        command = command,
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Token is never logged; only the host.
pub fn log_endpoint_resolved(endpoint: &Endpoint, interval: chrono::Duration) {
    info!(
        event = "core.session.endpoint_resolved",
        host = endpoint.host().as_deref().unwrap_or("<unparsed>"),
        interval_minutes = interval.num_minutes()
    );
}

/// `last` is the most recent timeline entry shown, if the command produced one.
pub fn log_session_ended(command: &str, last: Option<&TimelineEntry>) {
    match last {
        Some(entry) => info!(
            event = "core.session.ended",
            command = command,
            last_outcome = ?entry.outcome,
            last_cycle_at = %entry.date
        ),
        None => info!(event = "core.session.ended", command = command),
    }
}

pub fn log_command_failed(command: &str, error: &dyn std::error::Error) {
    error!(
        event = "core.session.command_failed",
        command = command,
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}
