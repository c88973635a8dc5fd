//! # Design
//!
//! - One error type for every operation so both delivery conventions carry the
//!   same information.
//! - Context (operation, path, url) lives in fields; messages stay constant.
//! - The GitHub domain failure is the one message with interpolated content,
//!   since callers match on its prefix.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for Relay operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors produced by Relay operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Reading a file failed.
    #[error("failed to read file")]
    Io {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path that could not be read.
        path: PathBuf,
        /// Error reported by the platform.
        source: io::Error,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build http client")]
    ClientBuild {
        /// Underlying reqwest error.
        source: reqwest::Error,
    },
    /// An HTTP request could not be completed.
    #[error("http request failed")]
    Network {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Requested URL.
        url: String,
        /// Transport error reported by reqwest.
        source: reqwest::Error,
    },
    /// The GitHub API answered with a message instead of a profile.
    #[error("Failed to get GitHub profile: {message}")]
    Api {
        /// Message reported by the API.
        message: String,
    },
    /// The operating system random source failed.
    #[error("random source failure")]
    RandomSource {
        /// Underlying random source error.
        source: rand_core::OsError,
    },
    /// A blocking task panicked or was cancelled.
    #[error("blocking task failed")]
    Task {
        /// Operation that owned the task.
        operation: &'static str,
        /// Join error reported by tokio.
        source: tokio::task::JoinError,
    },
}

/// Coarse classification of an [`OpsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// File-system failure.
    Io,
    /// Transport failure (including client construction).
    Network,
    /// Failure reported inside an otherwise successful response.
    Api,
    /// Random source failure.
    RandomSource,
    /// Blocking task failure.
    Task,
}

impl FailureKind {
    /// Stable label for logs and machine-readable output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "io",
            Self::Network => "network",
            Self::Api => "api",
            Self::RandomSource => "random_source",
            Self::Task => "task",
        }
    }
}

impl OpsError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn network(
        operation: &'static str,
        url: impl Into<String>,
        source: reqwest::Error,
    ) -> Self {
        Self::Network {
            operation,
            url: url.into(),
            source,
        }
    }

    /// Classify the failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Io { .. } => FailureKind::Io,
            Self::ClientBuild { .. } | Self::Network { .. } => FailureKind::Network,
            Self::Api { .. } => FailureKind::Api,
            Self::RandomSource { .. } => FailureKind::RandomSource,
            Self::Task { .. } => FailureKind::Task,
        }
    }

    /// Kind of the underlying platform I/O error, for file failures.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
