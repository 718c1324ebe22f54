//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.quieten.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `QUIETEN_API_BASE`, `QUIETEN_UNREAD_ONLY`
//! 4. **Command-line arguments** – `--api-base`, `--unread-only`/`-u`
//!
//! Every field is optional. The token is not part of the layered
//! configuration, so it can never be read from a file: it comes from
//! `QUIETEN_TOKEN` or `GITHUB_TOKEN`, otherwise the interactive session asks
//! for it and holds it in memory only.
//!
//! # Configuration File
//!
//! ```toml
//! api_base = "https://ghe.example.com/api/v3"
//! unread_only = false
//! log_filter = "quieten=debug"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::InboxError;
use crate::github::locator::{ApiBase, DEFAULT_API_BASE};

/// Environment variables consulted for the token, in order.
pub const TOKEN_VARIABLES: [&str; 2] = ["QUIETEN_TOKEN", "GITHUB_TOKEN"];

/// Tracing filter used when neither `RUST_LOG` nor `log_filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use quieten::QuietenConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = QuietenConfig::load().expect("failed to load configuration");
/// let api_base = config.api_base().expect("API base should be valid");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "QUIETEN",
    discovery(
        dotfile_name = ".quieten.toml",
        config_file_name = "quieten.toml",
        app_name = "quieten"
    )
)]
pub struct QuietenConfig {
    /// REST API base URL, for GitHub Enterprise Server installations.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Fetches unread notifications only.
    ///
    /// By default every notification, read or unread, is fetched.
    ///
    /// Can be provided via:
    /// - CLI: `--unread-only` / `-u`
    /// - Config file: `unread_only = true`
    #[ortho_config(cli_short = 'u')]
    pub unread_only: bool,

    /// Emits telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,

    /// Tracing filter directive, e.g. `quieten=debug`.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[ortho_config()]
    pub log_filter: Option<String>,
}

impl QuietenConfig {
    /// Reads the token from `QUIETEN_TOKEN`, then the legacy `GITHUB_TOKEN`.
    ///
    /// Returns `None` when neither variable holds a non-blank value, in which
    /// case the caller prompts for one.
    #[must_use]
    pub fn resolve_token() -> Option<String> {
        TOKEN_VARIABLES
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|token| !token.trim().is_empty())
    }

    /// Returns the configured API base, defaulting to public GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`InboxError::InvalidUrl`] when the configured value is not
    /// an HTTP(S) URL.
    pub fn api_base(&self) -> Result<ApiBase, InboxError> {
        ApiBase::parse(self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE))
    }

    /// Returns true when read notifications should be fetched too.
    #[must_use]
    pub const fn include_read(&self) -> bool {
        !self.unread_only
    }

    /// Returns the tracing filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests;
