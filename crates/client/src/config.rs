// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! API endpoint configuration.

use std::time::Duration;

use url::Url;

use crate::ClientError;

/// Host serving the public Boa API
pub const DEFAULT_HOST: &str = "boa.cs.iastate.edu";

/// Path of the XML-RPC endpoint on [`DEFAULT_HOST`]
pub const DEFAULT_PATH: &str = "/boa/?q=boa/api";

/// Per-request timeout applied by the HTTP transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the API lives: `https://{host}{path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    path: String,
    timeout: Duration,
}

impl Endpoint {
    /// Build an endpoint from a bare host and a path.
    ///
    /// The host may not contain `/` (so no scheme and no path), and the path
    /// must start with `/`.
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Result<Self, ClientError> {
        let host = host.into();
        let path = path.into();
        if host.is_empty() || host.contains('/') {
            return Err(ClientError::Config(format!(
                "host '{}' should not contain the protocol (https://) or a path (/)",
                host
            )));
        }
        if !path.starts_with('/') {
            return Err(ClientError::Config(format!("path '{}' should start with '/'", path)));
        }
        let endpoint = Self { host, path, timeout: DEFAULT_TIMEOUT };
        endpoint.url()?;
        Ok(endpoint)
    }

    /// Default endpoint with `BOA_HOST`, `BOA_PATH` and `BOA_TIMEOUT_MS`
    /// overrides applied.
    pub fn from_env() -> Result<Self, ClientError> {
        let host = std::env::var("BOA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let path = std::env::var("BOA_PATH").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut endpoint = Self::new(host, path)?;
        if let Some(timeout) = std::env::var("BOA_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
        {
            endpoint.timeout = timeout;
        }
        Ok(endpoint)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url(&self) -> Result<Url, ClientError> {
        let raw = format!("https://{}{}", self.host, self.path);
        Url::parse(&raw).map_err(|e| ClientError::Config(format!("invalid endpoint '{}': {}", raw, e)))
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            path: DEFAULT_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
