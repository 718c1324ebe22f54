//! GitHub notifications transport.
//!
//! This module wraps Octocrab to page through the authenticated user's
//! notifications and to change the subscription and read state of individual
//! threads. Errors are mapped into user-friendly variants so that callers can
//! surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;

pub use error::InboxError;
pub use gateway::{NotificationGateway, OctocrabNotificationGateway};
pub use locator::{ApiBase, DEFAULT_API_BASE, PersonalAccessToken, ThreadId};
pub use models::{NotificationRecord, UNKNOWN_SUBJECT_TYPE};
pub use pagination::{MAX_PER_PAGE, PageRequest};

#[cfg(test)]
pub use gateway::MockNotificationGateway;
