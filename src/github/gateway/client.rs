//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::InboxError;
use crate::github::locator::{ApiBase, PersonalAccessToken};

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token and API base URL.
///
/// Retries are disabled: every request reaches the server exactly once.
///
/// # Errors
///
/// Returns `InboxError::InvalidUrl` when the base URI cannot be parsed or
/// `InboxError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &ApiBase,
) -> Result<Octocrab, InboxError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| InboxError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .add_retry_config(RetryConfig::None)
        .base_uri(base_uri)
        .map_err(|error| InboxError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}

/// Parses a path relative to the API base into a request URI.
pub(super) fn relative_uri(path: &str) -> Result<Uri, InboxError> {
    path.parse::<Uri>()
        .map_err(|error| InboxError::InvalidUrl(error.to_string()))
}
