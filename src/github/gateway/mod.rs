//! Gateways for reading and mutating notification threads through Octocrab.
//!
//! This module provides a trait-based gateway for communicating with the
//! GitHub notifications API. The trait-based design enables mocking in tests
//! while the Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod http_utils;
mod notifications;

pub use notifications::OctocrabNotificationGateway;

use async_trait::async_trait;

use crate::github::error::InboxError;
use crate::github::locator::ThreadId;
use crate::github::models::NotificationRecord;
use crate::github::pagination::PageRequest;

/// Gateway for the notifications collection and per-thread mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch one page of notifications.
    async fn list_notifications(
        &self,
        request: PageRequest,
    ) -> Result<Vec<NotificationRecord>, InboxError>;

    /// Remove the subscription for one thread (`204 No Content` on success).
    async fn unsubscribe(&self, thread: &ThreadId) -> Result<(), InboxError>;

    /// Mark one thread as read (`205 Reset Content` on success).
    async fn mark_thread_read(&self, thread: &ThreadId) -> Result<(), InboxError>;

    /// Mark every notification as read as of the time of the call
    /// (`205 Reset Content` on success).
    async fn mark_all_read(&self) -> Result<(), InboxError>;
}
