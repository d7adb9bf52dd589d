//! Blocking dispatch of one notification to the server.

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NtfyError, Result};
use crate::headers;
use crate::notification::Notification;
use crate::payload::Payload;

/// Well-known public instance used when no server is configured.
pub const DEFAULT_SERVER: &str = "https://ntfy.sh";

/// Status carried by the `Delivery` error synthesized in
/// [`DryRun::Error`] mode. No real response carries it.
pub const DRY_RUN_STATUS: i32 = -1;

/// Reason carried by the `Delivery` error synthesized in
/// [`DryRun::Error`] mode.
pub const DRY_RUN_REASON: &str = "dry-run error mode";

/// Short-circuit switch for testing.
///
/// `On` validates and builds the request but skips delivery; `Error`
/// does the same and then fails with a sentinel `Delivery` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DryRun {
    #[default]
    Off,
    On,
    Error,
}

/// Client for one ntfy-compatible server.
///
/// ```ignore
/// let client = NtfyClient::new().with_server("https://ntfy.example.com");
/// client.push("alerts", &Notification::message("disk almost full"))?;
/// ```
#[derive(Debug)]
pub struct NtfyClient {
    server: String,
    dry_run: DryRun,
    http: HttpClient,
}

impl NtfyClient {
    /// Client against the public [`DEFAULT_SERVER`].
    pub fn new() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            dry_run: DryRun::Off,
            http: HttpClient::new(),
        }
    }

    /// Target server, e.g. a self-hosted instance.
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        let mut server = server.into();
        while server.ends_with('/') {
            server.pop();
        }
        self.server = server;
        self
    }

    pub fn with_dry_run(mut self, dry_run: DryRun) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Pushes one notification to `topic`.
    ///
    /// One blocking PUT, no retry: a non-2xx response fails with
    /// `Delivery`, a network-level failure with `Transport`. Parameter
    /// validation runs before the dry-run short-circuit, so dry-run
    /// pushes still reject bad input.
    pub fn push(&self, topic: &str, notification: &Notification) -> Result<()> {
        if topic.is_empty() {
            return Err(NtfyError::config("topic must not be empty"));
        }

        let payload = Payload::select(
            notification.message.as_deref(),
            notification.filepath.as_deref(),
        )?;
        let headers = header_map(headers::assemble(notification)?)?;

        match self.dry_run {
            DryRun::On => {
                debug!(topic, "dry-run: skipping delivery");
                return Ok(());
            }
            DryRun::Error => {
                return Err(NtfyError::Delivery {
                    status: DRY_RUN_STATUS,
                    reason: DRY_RUN_REASON.to_string(),
                });
            }
            DryRun::Off => {}
        }

        let url = format!("{}/{}", self.server, topic);
        debug!(%url, "pushing notification");
        let response = self
            .http
            .put(&url)
            .headers(headers)
            .body(payload.into_body())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NtfyError::Delivery {
                status: i32::from(status.as_u16()),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }
        Ok(())
    }
}

impl Default for NtfyClient {
    fn default() -> Self {
        Self::new()
    }
}

fn header_map(pairs: Vec<(&'static str, String)>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let value = HeaderValue::from_str(&value).map_err(|_| {
            NtfyError::config(format!(
                "the value for {name} contains characters that cannot be sent in a header"
            ))
        })?;
        map.insert(HeaderName::from_static(name), value);
    }
    Ok(map)
}

/// Pushes one notification to `topic` on the public server.
///
/// Convenience wrapper over a default [`NtfyClient`]; use the client for
/// server or dry-run configuration.
pub fn push(topic: &str, notification: &Notification) -> Result<()> {
    NtfyClient::new().push(topic, notification)
}
