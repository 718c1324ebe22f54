//! Best-effort notification source built on a [`NotificationGateway`].

use crate::github::error::InboxError;
use crate::github::gateway::NotificationGateway;
use crate::github::locator::ThreadId;
use crate::github::models::NotificationRecord;
use crate::github::pagination::PageRequest;

/// Receives progress while the notifications collection is drained.
pub trait FetchObserver {
    /// Called after each page that returned successfully.
    fn page_fetched(&mut self, page: u32, received: usize);

    /// Called once when the fetch loop ends.
    fn finished(&mut self, report: &FetchReport);
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFetchObserver;

impl FetchObserver for NoopFetchObserver {
    fn page_fetched(&mut self, _page: u32, _received: usize) {}

    fn finished(&mut self, _report: &FetchReport) {}
}

/// Outcome of draining the notifications collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchReport {
    /// Records in server order across pages.
    pub records: Vec<NotificationRecord>,
    /// Number of page requests issued, including a failed one.
    pub pages_requested: u32,
    /// Failure that stopped the loop early, if any.
    pub failure: Option<InboxError>,
}

impl FetchReport {
    /// Returns true when the loop reached the end of the collection.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Notification source for one authenticated session.
pub struct NotificationSource<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    client: &'client Gateway,
}

impl<Gateway> Clone for NotificationSource<'_, Gateway>
where
    Gateway: NotificationGateway,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<Gateway> Copy for NotificationSource<'_, Gateway> where Gateway: NotificationGateway {}

impl<'client, Gateway> NotificationSource<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    /// Create a new source using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetch every notification, page by page.
    ///
    /// Returns whatever was accumulated before a failure; see
    /// [`NotificationSource::fetch_all_observed`].
    pub async fn fetch_all(&self, include_read: bool) -> Vec<NotificationRecord> {
        self.fetch_all_observed(include_read, &mut NoopFetchObserver)
            .await
            .records
    }

    /// Fetch every notification while reporting progress to `observer`.
    ///
    /// Pages of [`crate::github::MAX_PER_PAGE`] records are requested from
    /// page 1 upwards. A short or empty page ends the loop; a full page is
    /// always followed by another request. The first failing request stops
    /// the loop and the pages already received are kept.
    pub async fn fetch_all_observed<Observer>(
        &self,
        include_read: bool,
        observer: &mut Observer,
    ) -> FetchReport
    where
        Observer: FetchObserver + ?Sized,
    {
        let mut report = FetchReport::default();
        let mut request = PageRequest::first(include_read);

        loop {
            report.pages_requested = request.page();
            let page = match self.client.list_notifications(request).await {
                Ok(page) => page,
                Err(error) => {
                    tracing::warn!(
                        page = request.page(),
                        kept = report.records.len(),
                        "notification fetch stopped early: {error}"
                    );
                    report.failure = Some(error);
                    break;
                }
            };

            let received = page.len();
            report.records.extend(page);
            observer.page_fetched(request.page(), received);

            if request.is_last_page(received) {
                break;
            }
            request = request.next();
        }

        tracing::debug!(
            records = report.records.len(),
            pages = report.pages_requested,
            complete = report.is_complete(),
            "notification fetch finished"
        );
        observer.finished(&report);
        report
    }

    /// Remove the subscription for one thread, reporting success.
    pub async fn unsubscribe(&self, thread: &ThreadId) -> bool {
        log_outcome("unsubscribe", thread, self.client.unsubscribe(thread).await)
    }

    /// Mark one thread as read, reporting success.
    pub async fn mark_read(&self, thread: &ThreadId) -> bool {
        log_outcome(
            "mark read",
            thread,
            self.client.mark_thread_read(thread).await,
        )
    }

    /// Mark every notification as read as of now, reporting success.
    pub async fn mark_all_read(&self) -> bool {
        match self.client.mark_all_read().await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!("mark all read failed: {error}");
                false
            }
        }
    }
}

fn log_outcome(operation: &str, thread: &ThreadId, outcome: Result<(), InboxError>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(thread = %thread, "{operation} failed: {error}");
            false
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
