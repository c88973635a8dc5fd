//! Typed settings consumed by the operations and binaries.

use serde::Serialize;

use crate::defaults::{DEFAULT_GITHUB_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_USER_AGENT};
use crate::error::ConfigResult;
use crate::validate::{
    validate_base_url, validate_log_format, validate_log_level, validate_user_agent,
};

/// Settings shared by the HTTP operations and the logging setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelaySettings {
    /// Base URL of the GitHub REST API (no trailing `/users` segment).
    pub github_api_base: String,
    /// `User-Agent` header sent with GitHub profile requests.
    pub user_agent: String,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: String,
    /// Requested log format (`json` or `pretty`); inferred from the build when absent.
    pub log_format: Option<String>,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            github_api_base: DEFAULT_GITHUB_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: None,
        }
    }
}

impl RelaySettings {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`](crate::ConfigError) encountered.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_base_url("github_api_base", &self.github_api_base)?;
        validate_user_agent(&self.user_agent)?;
        validate_log_level(&self.log_level)?;
        if let Some(format) = &self.log_format {
            validate_log_format(format)?;
        }
        Ok(())
    }

    /// Build the profile endpoint for `username`.
    ///
    /// The username is appended verbatim, matching how the endpoint is
    /// documented (`<base>/users/<username>`).
    #[must_use]
    pub fn profile_url(&self, username: &str) -> String {
        format!(
            "{}/users/{username}",
            self.github_api_base.trim_end_matches('/')
        )
    }
}
