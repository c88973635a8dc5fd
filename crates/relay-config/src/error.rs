//! Error types for settings validation.

use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A URL setting could not be parsed.
    #[error("invalid url setting")]
    InvalidUrl {
        /// Setting that failed to parse.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Underlying parse error.
        source: url::ParseError,
    },
    /// A setting held a value outside its accepted domain.
    #[error("invalid setting")]
    InvalidField {
        /// Setting that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl ConfigError {
    /// Name of the setting that failed.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidUrl { field, .. } | Self::InvalidField { field, .. } => field,
        }
    }
}

/// Convenience alias for settings results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_errors_expose_field_and_source() {
        let invalid_url = ConfigError::InvalidUrl {
            field: "github_api_base",
            value: "::".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert_eq!(invalid_url.to_string(), "invalid url setting");
        assert_eq!(invalid_url.field(), "github_api_base");
        assert!(invalid_url.source().is_some());

        let invalid_field = ConfigError::InvalidField {
            field: "log_level",
            value: "loud".to_string(),
            reason: "unknown log level",
        };
        assert_eq!(invalid_field.to_string(), "invalid setting");
        assert_eq!(invalid_field.field(), "log_level");
        assert!(invalid_field.source().is_none());
    }
}
