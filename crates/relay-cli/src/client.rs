//! Shared context, error types, and timeout handling for the CLI.

use std::fmt::{self, Display, Formatter};
use std::future::Future;
use std::time::Duration;

use anyhow::anyhow;
use relay_config::{ConfigError, RelaySettings};
use relay_delivery::DeliveryError;
use relay_ops::{HttpOps, OpsError};
use tracing::warn;

use crate::cli::DeliveryMode;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<OpsError> for CliError {
    fn from(error: OpsError) -> Self {
        Self::failure(error)
    }
}

impl From<DeliveryError<OpsError>> for CliError {
    fn from(error: DeliveryError<OpsError>) -> Self {
        match error {
            DeliveryError::Failed(error) => Self::from(error),
            other => Self::failure(other),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        let message = match &error {
            ConfigError::InvalidUrl { field, value, source } => {
                format!("{error}: {field}='{value}' ({source})")
            }
            ConfigError::InvalidField {
                field,
                value,
                reason,
            } => format!("{error}: {field}='{value}' ({reason})"),
        };
        Self::Validation(message)
    }
}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) ops: HttpOps,
    pub(crate) delivery: DeliveryMode,
    pub(crate) timeout: Duration,
}

impl AppContext {
    /// Build the shared HTTP handle from validated settings.
    pub(crate) fn new(
        settings: RelaySettings,
        delivery: DeliveryMode,
        timeout: Duration,
    ) -> CliResult<Self> {
        let ops = HttpOps::new(settings)?;
        Ok(Self {
            ops,
            delivery,
            timeout,
        })
    }

    /// Await `operation`, failing once the configured timeout elapses.
    pub(crate) async fn bounded<T, F>(&self, label: &'static str, operation: F) -> CliResult<T>
    where
        F: Future<Output = CliResult<T>> + Send,
        T: Send,
    {
        tokio::time::timeout(self.timeout, operation)
            .await
            .unwrap_or_else(|_| {
                warn!(
                    operation = label,
                    timeout_ms = self.timeout.as_millis(),
                    "operation timed out"
                );
                Err(CliError::failure(anyhow!(
                    "{label} timed out after {}ms",
                    self.timeout.as_millis()
                )))
            })
    }
}
