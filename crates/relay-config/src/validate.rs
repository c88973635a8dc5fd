//! Validation helpers for individual settings.

use url::Url;

use crate::error::{ConfigError, ConfigResult};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["json", "pretty"];

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn validate_base_url(field: &'static str, value: &str) -> ConfigResult<()> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidField {
            field,
            value: value.to_string(),
            reason: "scheme must be http or https",
        });
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidField {
            field,
            value: value.to_string(),
            reason: "url cannot be used as a base",
        });
    }
    Ok(())
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn validate_user_agent(value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field: "user_agent",
            value: value.to_string(),
            reason: "must not be empty",
        });
    }
    // Header values are limited to visible ASCII plus space and tab.
    if !value
        .bytes()
        .all(|byte| byte == b'\t' || (0x20..0x7f).contains(&byte))
    {
        return Err(ConfigError::InvalidField {
            field: "user_agent",
            value: value.to_string(),
            reason: "must be visible ascii",
        });
    }
    Ok(())
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn validate_log_level(value: &str) -> ConfigResult<()> {
    if LOG_LEVELS.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            field: "log_level",
            value: value.to_string(),
            reason: "unknown log level",
        })
    }
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn validate_log_format(value: &str) -> ConfigResult<()> {
    if LOG_FORMATS.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            field: "log_format",
            value: value.to_string(),
            reason: "unknown log format",
        })
    }
}
