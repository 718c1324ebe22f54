//! Quieten library crate for triaging GitHub notifications in bulk.
//!
//! The library drains the notifications API into memory, summarises threads
//! per owning organisation, and applies confirmed unsubscribe / mark-read
//! batches one thread at a time while tracking partial success.

pub mod batch;
pub mod config;
pub mod github;
pub mod inbox;
pub mod telemetry;

pub use batch::{
    Batch, BatchMutator, BatchOperations, BatchOutcome, BatchState, BatchTally, Confirm,
    ProgressEvent, ProgressSink,
};
pub use config::QuietenConfig;
pub use github::{
    ApiBase, InboxError, NotificationGateway, NotificationRecord, OctocrabNotificationGateway,
    PersonalAccessToken, ThreadId,
};
pub use inbox::{
    FetchObserver, FetchReport, GroupStats, GroupedStats, NotificationSource, aggregate,
    filter_by_group, summary_report,
};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
