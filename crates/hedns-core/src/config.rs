//! Configuration types for the hedns toolkit
//!
//! Connection settings are serializable and can be loaded from the
//! environment. Credentials are kept apart from them: they are supplied once
//! per process and never written anywhere.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

/// Public dns.he.net console
pub const DEFAULT_BASE_URL: &str = "https://dns.he.net";

/// Connection settings for the web console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Console root URL, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request HTTP timeout (in seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional User-Agent header override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ConsoleConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }

    /// Point the client at another console root (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `HEDNS_BASE_URL`: console root (default `https://dns.he.net`)
    /// - `HEDNS_HTTP_TIMEOUT_SECS`: request timeout (default 30)
    /// - `HEDNS_USER_AGENT`: User-Agent override
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(base_url) = env::var("HEDNS_BASE_URL") {
            config = config.with_base_url(base_url);
        }

        if let Ok(timeout) = env::var("HEDNS_HTTP_TIMEOUT_SECS") {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::config(format!(
                    "HEDNS_HTTP_TIMEOUT_SECS must be a number of seconds. Got: {}",
                    timeout
                ))
            })?;
        }

        config.user_agent = env::var("HEDNS_USER_AGENT").ok().filter(|s| !s.is_empty());

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(Error::config(format!(
                "Console URL must use HTTP or HTTPS scheme. Got: {}",
                self.base_url
            )));
        }

        if !(1..=300).contains(&self.timeout_secs) {
            return Err(Error::config(format!(
                "HTTP timeout must be between 1 and 300 seconds. Got: {}",
                self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Console login credentials
#[derive(Clone)]
pub struct Credentials {
    username: String,
    /// ⚠️ NEVER log this value
    password: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(Error::config("Username cannot be empty"));
        }
        if password.is_empty() {
            return Err(Error::config("Password cannot be empty"));
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom Debug implementation that hides the password
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}
