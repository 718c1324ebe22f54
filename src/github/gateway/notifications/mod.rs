//! Octocrab-backed gateway for the notifications API.

use std::future::Future;

use async_trait::async_trait;
use http::StatusCode;
use octocrab::{Octocrab, Page};

use crate::github::error::InboxError;
use crate::github::locator::{ApiBase, PersonalAccessToken, ThreadId};
use crate::github::models::{ApiNotification, NotificationRecord};
use crate::github::pagination::PageRequest;

use super::NotificationGateway;
use super::client::{build_octocrab_client, relative_uri};
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::extract_github_message;

const NOTIFICATIONS_PATH: &str = "/notifications";

/// Octocrab-backed notifications gateway.
pub struct OctocrabNotificationGateway {
    client: Octocrab,
}

impl OctocrabNotificationGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base.
    ///
    /// # Errors
    ///
    /// Returns `InboxError::InvalidUrl` when the base URI cannot be parsed or
    /// `InboxError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &ApiBase) -> Result<Self, InboxError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

/// Accepts `status` when it is one of `accepted`; otherwise reads the error
/// body and maps it.
async fn expect_status<Body>(
    operation: &str,
    status: StatusCode,
    accepted: &[StatusCode],
    body: Body,
) -> Result<(), InboxError>
where
    Body: Future<Output = octocrab::Result<String>>,
{
    if accepted.contains(&status) {
        return Ok(());
    }

    let text = body.await.unwrap_or_else(|_| String::new());
    Err(map_http_error(
        operation,
        status,
        extract_github_message(&text),
    ))
}

#[async_trait]
impl NotificationGateway for OctocrabNotificationGateway {
    async fn list_notifications(
        &self,
        request: PageRequest,
    ) -> Result<Vec<NotificationRecord>, InboxError> {
        let all = if request.include_read() { "true" } else { "false" };
        let page_str = request.page().to_string();
        let per_page_str = request.per_page().to_string();

        let query_params = [
            ("all", all),
            ("per_page", per_page_str.as_str()),
            ("page", page_str.as_str()),
        ];

        tracing::debug!(page = request.page(), "requesting notifications page");

        let page: Page<ApiNotification> = self
            .client
            .get(NOTIFICATIONS_PATH, Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list notifications", &error))?;

        Ok(page
            .items
            .into_iter()
            .map(ApiNotification::into)
            .collect())
    }

    async fn unsubscribe(&self, thread: &ThreadId) -> Result<(), InboxError> {
        let uri = relative_uri(&thread.subscription_path())?;
        let response = self
            .client
            ._delete(uri, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("unsubscribe", &error))?;

        let status = response.status();
        expect_status(
            "unsubscribe",
            status,
            &[StatusCode::NO_CONTENT],
            self.client.body_to_string(response),
        )
        .await
    }

    async fn mark_thread_read(&self, thread: &ThreadId) -> Result<(), InboxError> {
        let uri = relative_uri(&thread.thread_path())?;
        let response = self
            .client
            ._patch(uri, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("mark thread read", &error))?;

        let status = response.status();
        expect_status(
            "mark thread read",
            status,
            &[StatusCode::RESET_CONTENT],
            self.client.body_to_string(response),
        )
        .await
    }

    async fn mark_all_read(&self) -> Result<(), InboxError> {
        let uri = relative_uri(NOTIFICATIONS_PATH)?;
        let response = self
            .client
            ._put(uri, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("mark all read", &error))?;

        let status = response.status();
        expect_status(
            "mark all read",
            status,
            &[StatusCode::RESET_CONTENT],
            self.client.body_to_string(response),
        )
        .await
    }
}
