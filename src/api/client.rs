//! HTTP client for the workflow service
//!
//! Every call resolves to an [`Outcome`]; transport faults are folded in
//! rather than returned as errors, so a dead service can only ever fail
//! assertions.

use std::error::Error as StdError;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::common::{Error, Result};

use super::protocol::{Outcome, Request};

/// Something that can carry a [`Request`] to the workflow service
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Outcome;
}

/// reqwest-backed [`Transport`] bound to one base URL
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed).map_err(|e| Error::invalid_base_url(base_url, e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(
                base_url,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if url.host_str().is_none() {
            return Err(Error::invalid_base_url(base_url, "missing host"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self {
            base_url: trimmed.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: Request) -> Outcome {
        let url = self.url(&request.path);
        let started = Instant::now();

        let mut builder = self.client.request(request.method.clone(), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(method = %request.method, %url, "request failed: {}", e);
                return Outcome::Transport(describe_error(&e));
            }
        };

        let status = response.status().as_u16();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(method = %request.method, %url, status, "reading body failed: {}", e);
                return Outcome::Transport(describe_error(&e));
            }
        };

        tracing::debug!(
            method = %request.method,
            %url,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "workflow service responded"
        );

        Outcome::from_response(status, &bytes)
    }
}

/// Stands in for a service whose address cannot be used at all
pub struct Unreachable {
    reason: String,
}

impl Unreachable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Transport for Unreachable {
    async fn execute(&self, _request: Request) -> Outcome {
        Outcome::Transport(self.reason.clone())
    }
}

/// Transport for `base_url`
///
/// An unusable URL yields [`Unreachable`], so the run fails its
/// connectivity check instead of stopping before the report.
pub fn connect(base_url: &str, timeout: Duration) -> Result<Box<dyn Transport>> {
    match HttpClient::new(base_url, timeout) {
        Ok(client) => Ok(Box::new(client)),
        Err(e @ Error::InvalidBaseUrl { .. }) => {
            tracing::warn!("{}", e);
            Ok(Box::new(Unreachable::new(e.to_string())))
        }
        Err(e) => Err(e),
    }
}

/// Flatten a reqwest error and its causes into one line
fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        return "request timed out".to_string();
    }

    let mut message = e.to_string();
    let mut source = StdError::source(e);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
