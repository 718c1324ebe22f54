//! Session-level view of the notification inbox.
//!
//! [`NotificationSource`] drains the paginated notifications collection and
//! exposes per-thread mutations under a best-effort contract: transport
//! failures become partial lists or `false`, never errors. The aggregation
//! helpers derive per-organisation statistics from a fetched list.

pub mod aggregate;
pub mod report;
pub mod source;

pub use aggregate::{GroupStats, GroupedStats, TypeCounts, aggregate, filter_by_group};
pub use report::{MAX_LISTED_REPOS, summary_report};
pub use source::{FetchObserver, FetchReport, NoopFetchObserver, NotificationSource};
