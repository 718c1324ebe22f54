//! Data models representing notification threads.

use serde::Deserialize;

use super::locator::ThreadId;

/// Subject type recorded when the API omits one.
pub const UNKNOWN_SUBJECT_TYPE: &str = "Unknown";

/// One notification thread tied to a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    /// Thread identifier, used as the mutation key.
    pub id: ThreadId,
    /// Repository full name in `owner/repo` form; empty when absent.
    pub repository_full_name: String,
    /// Subject type tag such as `Issue` or `PullRequest`.
    pub subject_type: String,
    /// Whether the thread is unread.
    pub unread: bool,
}

impl NotificationRecord {
    /// Builds a record from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        repository_full_name: impl Into<String>,
        subject_type: impl Into<String>,
        unread: bool,
    ) -> Self {
        Self {
            id: ThreadId::new(id),
            repository_full_name: repository_full_name.into(),
            subject_type: subject_type.into(),
            unread,
        }
    }

    /// Splits the full name into `(owner, repo)` at the first `/`.
    ///
    /// Returns `None` for ungroupable records.
    #[must_use]
    pub fn owner_and_repo(&self) -> Option<(&str, &str)> {
        self.repository_full_name.split_once('/')
    }

    /// Returns true when the record belongs to the given owner.
    #[must_use]
    pub fn belongs_to(&self, owner: &str) -> bool {
        self.repository_full_name
            .strip_prefix(owner)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiNotification {
    pub(super) id: String,
    #[serde(default)]
    pub(super) unread: bool,
    #[serde(default)]
    pub(super) subject: Option<ApiSubject>,
    #[serde(default)]
    pub(super) repository: Option<ApiRepository>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiSubject {
    #[serde(rename = "type")]
    pub(super) kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) full_name: Option<String>,
}

impl From<ApiNotification> for NotificationRecord {
    fn from(value: ApiNotification) -> Self {
        Self {
            id: ThreadId::new(value.id),
            repository_full_name: value
                .repository
                .and_then(|repository| repository.full_name)
                .unwrap_or_default(),
            subject_type: value
                .subject
                .and_then(|subject| subject.kind)
                .unwrap_or_else(|| UNKNOWN_SUBJECT_TYPE.to_owned()),
            unread: value.unread,
        }
    }
}
