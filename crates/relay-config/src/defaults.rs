//! Default values and environment variable names for Relay settings.

/// Base URL of the GitHub REST API.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
/// Identifying `User-Agent` sent with GitHub requests; the API rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "request";
/// Log level used when neither `RELAY_LOG_LEVEL` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Overrides the GitHub API base URL.
pub const ENV_GITHUB_API_URL: &str = "RELAY_GITHUB_API_URL";
/// Overrides the `User-Agent` header sent with GitHub requests.
pub const ENV_USER_AGENT: &str = "RELAY_USER_AGENT";
/// Overrides the default log level.
pub const ENV_LOG_LEVEL: &str = "RELAY_LOG_LEVEL";
/// Selects the log format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "RELAY_LOG_FORMAT";
