//! Application telemetry events and sinks.
//!
//! Quieten keeps no state between runs, but a session can still emit
//! lightweight structured events to support debugging: how much of the inbox
//! was fetched and how each batch ended.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Quieten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records the end of a notification fetch.
    NotificationsFetched {
        /// Records received.
        count: usize,
        /// Page requests issued.
        pages: u32,
        /// False when a failure cut the fetch short.
        complete: bool,
    },
    /// Records the end of an executed batch.
    BatchFinished {
        /// Records for which every requested operation succeeded.
        succeeded: usize,
        /// Records in the batch.
        total: usize,
        /// True when an interrupt stopped the batch early.
        interrupted: bool,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
