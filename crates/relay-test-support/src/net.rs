//! Local network endpoints for transport-failure tests.

use std::net::TcpListener;

use anyhow::{Context, Result};

/// URL of a loopback port that was free a moment ago and has nothing listening.
///
/// Connecting to it fails with "connection refused", which lets tests exercise
/// transport errors without depending on DNS or the public internet.
///
/// # Errors
///
/// Returns an error if no ephemeral port can be reserved.
pub fn closed_local_url() -> Result<String> {
    let listener =
        TcpListener::bind("127.0.0.1:0").context("failed to reserve an ephemeral port")?;
    let port = listener
        .local_addr()
        .context("failed to read reserved port")?
        .port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{port}/"))
}
