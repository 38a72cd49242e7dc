//! Client configuration
//!
//! Settings can be built in code or loaded from YAML:
//!
//! ```yaml
//! api_key: sk_test_...
//! base_url: https://api.stripe.com
//! timeout_secs: 30
//! log_level: info
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpBackendConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::log::{redact_middle, Level, FILLER};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for a resource client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Secret or restricted API key
    pub api_key: String,

    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Minimum level of the client's diagnostics
    #[serde(default)]
    pub log_level: Level,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

/// Characters of the API key left visible at each end in debug output
const KEY_VISIBLE_START: usize = 8;
const KEY_VISIBLE_END: usize = 4;

fn default_user_agent() -> String {
    format!("resource-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            log_level: Level::default(),
            user_agent: default_user_agent(),
        }
    }

    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Check that the config can be used to build a client
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        Ok(())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key with everything but its edges masked; short keys are
    /// masked entirely
    pub fn masked_api_key(&self) -> String {
        let len = self.api_key.chars().count();
        if len <= KEY_VISIBLE_START + KEY_VISIBLE_END {
            return FILLER.to_string().repeat(len);
        }
        redact_middle(&self.api_key, KEY_VISIBLE_START, KEY_VISIBLE_END)
    }

    /// Transport settings derived from this config
    pub fn backend_config(&self) -> HttpBackendConfig {
        HttpBackendConfig::builder()
            .base_url(&self.base_url)
            .timeout(self.timeout())
            .user_agent(&self.user_agent)
            .build()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.masked_api_key())
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
