//! Transport backend
//!
//! Resource clients talk to the API through the [`Backend`] trait.
//! [`HttpBackend`] is the blocking `reqwest` implementation used in
//! production; tests substitute their own.

use crate::error::{ApiError, Error, Result};
use crate::log::{default_logger, LeveledLog};
use crate::types::{JsonValue, Method};
use crate::{debugf, errorf};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Executes API calls on behalf of resource clients
pub trait Backend: Send + Sync {
    /// Perform one call and return the decoded JSON body
    ///
    /// `params` go into the query string for GET and DELETE and into a
    /// form-encoded body for POST. `key` authenticates the call.
    fn call(&self, method: Method, path: &str, key: &str, params: &[(String, String)])
        -> Result<JsonValue>;
}

/// Configuration for [`HttpBackend`]
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Base URL prepended to relative paths
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("resource-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpBackendConfig {
    /// Create a new config builder
    pub fn builder() -> HttpBackendConfigBuilder {
        HttpBackendConfigBuilder::default()
    }
}

/// Builder for backend config
#[derive(Default)]
pub struct HttpBackendConfigBuilder {
    config: HttpBackendConfig,
}

impl HttpBackendConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpBackendConfig {
        self.config
    }
}

/// Blocking HTTP backend
pub struct HttpBackend {
    client: Client,
    config: HttpBackendConfig,
    logger: Arc<dyn LeveledLog>,
}

impl HttpBackend {
    /// Create a backend with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpBackendConfig::default())
    }

    /// Create a backend with custom configuration
    ///
    /// Diagnostics go to the process default logger unless replaced with
    /// [`with_logger`](Self::with_logger).
    pub fn with_config(config: HttpBackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            logger: default_logger(),
        })
    }

    /// Use `logger` for this backend's diagnostics
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn LeveledLog>) -> Self {
        self.logger = logger;
        self
    }

    /// Backend configuration
    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl Backend for HttpBackend {
    fn call(
        &self,
        method: Method,
        path: &str,
        key: &str,
        params: &[(String, String)],
    ) -> Result<JsonValue> {
        let url = self.build_url(path);
        debugf!(self.logger, "Requesting {} {}", method, url);

        let mut req = self.client.request(method.into(), &url).bearer_auth(key);
        if !params.is_empty() {
            req = if method.params_in_query() {
                req.query(params)
            } else {
                req.form(params)
            };
        }

        let response = req.send().map_err(|e| {
            errorf!(self.logger, "Request failed: {} {}: {}", method, url, e);
            Error::Http(e)
        })?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let err = decode_error(status.as_u16(), &body);
            errorf!(
                self.logger,
                "Request error from API (status {}): {}",
                status.as_u16(),
                body
            );
            return Err(err);
        }

        debugf!(self.logger, "Response from API: {} {}", status.as_u16(), url);
        if body.trim().is_empty() {
            return Ok(JsonValue::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// Turn a failed response body into an error
///
/// Bodies carrying an `{"error": {...}}` envelope become [`Error::Api`];
/// anything else is kept verbatim in [`Error::HttpStatus`].
pub(crate) fn decode_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => Error::api(status, envelope.error),
        Err(_) => Error::http_status(status, body),
    }
}
