use std::time::Duration;

use crate::error::{Result, WcError};
use crate::origin::Origin;

pub const ORIGIN_VAR: &str = "WC_ORIGIN";
pub const TIMEOUT_VAR: &str = "WC_TIMEOUT_SECS";
pub const COOKIE_VAR: &str = "WC_COOKIE";

const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Settings for a [`GroupStageClient`](crate::client::GroupStageClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin every API path is resolved against
    pub origin: Origin,
    /// Per-request timeout; `None` lets a request wait as long as the server takes
    pub timeout: Option<Duration>,
    /// Ambient cookie string
    pub cookie: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: Origin::from_serialized(DEFAULT_ORIGIN),
            timeout: None,
            cookie: String::new(),
        }
    }
}

impl ClientConfig {
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = cookie.into();
        self
    }

    /// Reads `WC_ORIGIN`, `WC_TIMEOUT_SECS` and `WC_COOKIE`, keeping defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(origin) = lookup(ORIGIN_VAR) {
            config.origin = Origin::parse(&origin)
                .map_err(|e| WcError::Config(format!("{}: {}", ORIGIN_VAR, e)))?;
        }

        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                WcError::Config(format!("{}='{}': {}", TIMEOUT_VAR, timeout, e))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(cookie) = lookup(COOKIE_VAR) {
            config.cookie = cookie;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(WcError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}
