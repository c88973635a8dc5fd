//! HTTP operations: response status lookup and GitHub profile retrieval.
//!
//! # Design
//! - `HttpOps` owns one `reqwest::Client`; clones share its connection pool.
//! - Non-2xx statuses are values, not failures. Only transport errors and the
//!   GitHub `message` field fail.
//! - No retries and no timeouts here; callers layer those on.

use relay_config::RelaySettings;
use relay_delivery::{Completion, spawn_delivery};
use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::error::{OpsError, OpsResult};

/// Handle for the HTTP-backed operations.
#[derive(Debug, Clone)]
pub struct HttpOps {
    client: Client,
    settings: RelaySettings,
}

impl HttpOps {
    /// Build a handle with a default `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::ClientBuild`] when the TLS backend cannot be
    /// initialised.
    pub fn new(settings: RelaySettings) -> OpsResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| OpsError::ClientBuild { source })?;
        Ok(Self { client, settings })
    }

    /// Build a handle around an existing client.
    #[must_use]
    pub const fn with_client(client: Client, settings: RelaySettings) -> Self {
        Self { client, settings }
    }

    /// Settings this handle was built with.
    #[must_use]
    pub const fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    /// Issue a GET to `url` and return the response status code.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::Network`] when the request cannot be completed
    /// (invalid URL, DNS, connection refused, TLS).
    #[instrument(name = "ops.http_status", skip(self))]
    pub async fn status(&self, url: &str) -> OpsResult<u16> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| OpsError::network("ops.http_status", url, source))?;
        let status = response.status().as_u16();
        debug!(status, "http status received");
        Ok(status)
    }

    /// Callback form of [`HttpOps::status`].
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn status_callback<C>(&self, url: impl Into<String>, notify: C) -> JoinHandle<()>
    where
        C: FnOnce(Completion<u16, OpsError>) + Send + 'static,
    {
        let ops = self.clone();
        let url = url.into();
        spawn_delivery(async move { ops.status(&url).await }, notify)
    }

    /// Fetch the public profile of `username` as JSON.
    ///
    /// Sends `User-Agent` from the settings and asks for JSON. A body that
    /// does not parse is returned as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::Network`] on transport failure and
    /// [`OpsError::Api`] when the body carries a truthy `message` field,
    /// whatever the HTTP status.
    #[instrument(name = "ops.github_profile", skip(self))]
    pub async fn github_profile(&self, username: &str) -> OpsResult<Value> {
        let url = self.settings.profile_url(username);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| OpsError::network("ops.github_profile", url.as_str(), source))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|source| OpsError::network("ops.github_profile", url.as_str(), source))?;

        let body = parse_body(text);
        if let Some(message) = api_message(&body) {
            warn!(status, message = %message, "github api reported a failure");
            return Err(OpsError::Api { message });
        }
        debug!(status, "github profile received");
        Ok(body)
    }

    /// Callback form of [`HttpOps::github_profile`].
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn github_profile_callback<C>(
        &self,
        username: impl Into<String>,
        notify: C,
    ) -> JoinHandle<()>
    where
        C: FnOnce(Completion<Value, OpsError>) + Send + 'static,
    {
        let ops = self.clone();
        let username = username.into();
        spawn_delivery(async move { ops.github_profile(&username).await }, notify)
    }
}

/// [`HttpOps::status`] with default settings.
///
/// # Errors
///
/// See [`HttpOps::status`]; also fails when the client cannot be built.
pub async fn http_status(url: &str) -> OpsResult<u16> {
    HttpOps::new(RelaySettings::default())?.status(url).await
}

/// Callback form of [`http_status`]. Client construction failures are
/// delivered through `notify` as well.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn http_status_callback<C>(url: impl Into<String>, notify: C) -> JoinHandle<()>
where
    C: FnOnce(Completion<u16, OpsError>) + Send + 'static,
{
    let url = url.into();
    spawn_delivery(async move { http_status(&url).await }, notify)
}

/// [`HttpOps::github_profile`] against the public GitHub API.
///
/// # Errors
///
/// See [`HttpOps::github_profile`]; also fails when the client cannot be built.
pub async fn github_profile(username: &str) -> OpsResult<Value> {
    HttpOps::new(RelaySettings::default())?
        .github_profile(username)
        .await
}

/// Callback form of [`github_profile`].
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn github_profile_callback<C>(username: impl Into<String>, notify: C) -> JoinHandle<()>
where
    C: FnOnce(Completion<Value, OpsError>) + Send + 'static,
{
    let username = username.into();
    spawn_delivery(async move { github_profile(&username).await }, notify)
}

fn parse_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

fn api_message(body: &Value) -> Option<String> {
    let message = body.get("message").filter(|value| is_truthy(value))?;
    Some(match message {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
