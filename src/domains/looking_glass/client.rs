//! HTTP client for the Looking Glass backend.
//!
//! One blocking GET per query, never retried. This module must not be called
//! from inside an async runtime: `reqwest::blocking` spins up its own. Each
//! worker thread keeps one client for its lifetime.

use std::cell::OnceCell;
use std::time::Duration;

use reqwest::blocking::{Client, Request};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use super::query::Endpoint;
use crate::core::config::BackendConfig;

/// Raw failure from the backend exchange, before classification.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connect, DNS, timeout, body read).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// A success response whose body is not JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("could not build request: {0}")]
    Request(String),
}

/// Source of raw backend payloads.
pub trait Backend: Send + Sync + 'static {
    fn fetch(&self, endpoint: Endpoint, params: &[(&'static str, String)])
    -> Result<Value, FetchError>;
}

/// [`Backend`] talking to the real service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    timeout: Duration,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the GET request for `endpoint`. Parameters are URL-encoded in
    /// the order given.
    pub fn request(
        &self,
        client: &Client,
        endpoint: Endpoint,
        params: &[(&'static str, String)],
    ) -> Result<Request, FetchError> {
        client
            .get(format!("{}{}", self.base_url, endpoint.path()))
            .query(params)
            .timeout(self.timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))
    }

    fn describe_transport(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs())
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        }
    }
}

thread_local! {
    /// Blocking client of the current worker thread. Timeouts are set per
    /// request, so one client serves every backend.
    static CLIENT: OnceCell<Client> = const { OnceCell::new() };
}

/// The calling thread's client, built on first use.
fn thread_client() -> Result<Client, FetchError> {
    CLIENT.with(|cell| {
        if let Some(client) = cell.get() {
            return Ok(client.clone());
        }
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(cell.get_or_init(|| client).clone())
    })
}

impl Backend for HttpBackend {
    fn fetch(
        &self,
        endpoint: Endpoint,
        params: &[(&'static str, String)],
    ) -> Result<Value, FetchError> {
        let client = thread_client()?;
        let request = self.request(&client, endpoint, params)?;
        info!("GET {}", request.url());

        let response = client
            .execute(request)
            .map_err(|e| FetchError::Transport(self.describe_transport(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(self.describe_transport(&e)))?;
        debug!("Backend response ({}): {}", status, body);

        // An empty 2xx body carries no data, same as an explicit `null`.
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
