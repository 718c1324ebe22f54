//! Shared test utilities for CLI tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use quieten::github::PageRequest;
use quieten::{InboxError, NotificationGateway, NotificationRecord, ThreadId};

/// Gateway call captured by [`ScriptedGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    /// `list_notifications` for the given page.
    List {
        /// Requested page.
        page: u32,
        /// Whether read notifications were requested.
        include_read: bool,
    },
    /// `unsubscribe` for a thread.
    Unsubscribe(String),
    /// `mark_thread_read` for a thread.
    MarkRead(String),
    /// `mark_all_read`.
    MarkAllRead,
}

/// A gateway that serves one fixed inbox and records every call.
///
/// Each fetch replays `inbox` as a single short page; mutations succeed
/// unless the thread id is listed in `failing`.
#[derive(Default)]
pub struct ScriptedGateway {
    inbox: Vec<NotificationRecord>,
    failing: Vec<String>,
    calls: Mutex<VecDeque<GatewayCall>>,
}

impl ScriptedGateway {
    /// Serves `inbox` on every fetch.
    pub fn serving(inbox: Vec<NotificationRecord>) -> Self {
        Self {
            inbox,
            ..Self::default()
        }
    }

    /// Makes mutations for `thread` fail.
    pub fn failing_for(mut self, thread: &str) -> Self {
        self.failing.push(thread.to_owned());
        self
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls
            .lock()
            .expect("calls mutex should be available")
            .iter()
            .cloned()
            .collect()
    }

    /// Mutation calls made so far.
    pub fn mutations(&self) -> Vec<GatewayCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, GatewayCall::List { .. }))
            .collect()
    }

    fn push(&self, call: GatewayCall) {
        self.calls
            .lock()
            .expect("calls mutex should be available")
            .push_back(call);
    }

    fn outcome(&self, thread: &ThreadId) -> Result<(), InboxError> {
        if self.failing.iter().any(|failing| failing == thread.as_str()) {
            return Err(InboxError::Network {
                message: "scripted failure".to_owned(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationGateway for ScriptedGateway {
    async fn list_notifications(
        &self,
        request: PageRequest,
    ) -> Result<Vec<NotificationRecord>, InboxError> {
        self.push(GatewayCall::List {
            page: request.page(),
            include_read: request.include_read(),
        });
        Ok(self.inbox.clone())
    }

    async fn unsubscribe(&self, thread: &ThreadId) -> Result<(), InboxError> {
        self.push(GatewayCall::Unsubscribe(thread.as_str().to_owned()));
        self.outcome(thread)
    }

    async fn mark_thread_read(&self, thread: &ThreadId) -> Result<(), InboxError> {
        self.push(GatewayCall::MarkRead(thread.as_str().to_owned()));
        self.outcome(thread)
    }

    async fn mark_all_read(&self) -> Result<(), InboxError> {
        self.push(GatewayCall::MarkAllRead);
        Ok(())
    }
}
