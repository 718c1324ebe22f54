//! Identity wrappers for the session credential, API endpoint and threads.

use std::fmt;

use url::Url;

use super::error::InboxError;

/// Public GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `InboxError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, InboxError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InboxError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

// Keeps the secret out of logs and panic messages.
impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Base URL of the REST API a session talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses an API base URL.
    ///
    /// # Errors
    ///
    /// Returns `InboxError::InvalidUrl` when the value is not an absolute
    /// HTTP(S) URL.
    pub fn parse(value: &str) -> Result<Self, InboxError> {
        let parsed =
            Url::parse(value.trim()).map_err(|error| InboxError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(InboxError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self(parsed))
    }

    /// The public GitHub API base.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`ApiBase::parse`].
    pub fn github() -> Result<Self, InboxError> {
        Self::parse(DEFAULT_API_BASE)
    }

    /// Borrow the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Opaque notification thread identifier used as the mutation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadId(String);

impl ThreadId {
    /// Wraps a raw thread identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Path of the thread resource, relative to the API base.
    #[must_use]
    pub fn thread_path(&self) -> String {
        format!("/notifications/threads/{}", self.0)
    }

    /// Path of the thread's subscription resource.
    #[must_use]
    pub fn subscription_path(&self) -> String {
        format!("/notifications/threads/{}/subscription", self.0)
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
