//! Test fixtures and environment helpers.

/// Variable that opts a test run into suites touching the public internet.
pub const LIVE_NETWORK_ENV: &str = "RELAY_LIVE_NETWORK";

/// Returns `true` when suites that reach real hosts (GitHub, example.com) may run.
#[must_use]
pub fn live_network_enabled() -> bool {
    live_network_enabled_with(std::env::var(LIVE_NETWORK_ENV).ok())
}

fn live_network_enabled_with(value: Option<String>) -> bool {
    value.is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}
