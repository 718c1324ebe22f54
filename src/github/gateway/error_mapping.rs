//! Error mapping helpers for the Octocrab notification gateway.

use http::StatusCode;

use crate::github::error::InboxError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> InboxError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(
            operation,
            source.status_code,
            Some(source.message.clone()),
        );
    }

    if is_network_error(error) {
        return InboxError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    InboxError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a status that differs from the operation's success status.
pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> InboxError {
    if is_auth_failure(status) {
        let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
        return InboxError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        };
    }

    match maybe_message {
        Some(message) if status.is_client_error() || status.is_server_error() => {
            InboxError::Api {
                message: format!("{operation} failed with status {status}: {message}"),
            }
        }
        _ => InboxError::UnexpectedStatus {
            operation: operation.to_owned(),
            status: status.as_u16(),
        },
    }
}
