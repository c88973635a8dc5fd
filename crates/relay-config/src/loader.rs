//! Settings loading from the process environment.
//!
//! # Design
//! - Every setting has a default; the environment only overrides.
//! - Blank values are treated as unset so `VAR=` does not disable a default.
//! - Lookup is injectable so tests never mutate the process environment.

use tracing::debug;

use crate::defaults::{ENV_GITHUB_API_URL, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_USER_AGENT};
use crate::error::ConfigResult;
use crate::model::RelaySettings;

impl RelaySettings {
    /// Load settings from `RELAY_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an override fails validation.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when an override fails validation.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        let settings = Self {
            github_api_base: read(ENV_GITHUB_API_URL).unwrap_or(defaults.github_api_base),
            user_agent: read(ENV_USER_AGENT).unwrap_or(defaults.user_agent),
            log_level: read(ENV_LOG_LEVEL)
                .map(|level| level.to_ascii_lowercase())
                .unwrap_or(defaults.log_level),
            log_format: read(ENV_LOG_FORMAT)
                .map(|format| format.to_ascii_lowercase())
                .or(defaults.log_format),
        };
        settings.validate()?;

        debug!(
            github_api_base = %settings.github_api_base,
            log_level = %settings.log_level,
            "relay settings loaded"
        );
        Ok(settings)
    }
}
