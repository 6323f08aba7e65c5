// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file and credential resolution.
//!
//! Precedence: command-line flags, then `BOA_*` environment variables
//! (both handled by clap), then `$XDG_CONFIG_HOME/boa/config.toml`, then
//! the built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use boa_client::{Endpoint, DEFAULT_HOST, DEFAULT_PATH};
use serde::Deserialize;

use crate::exit_error::{ExitError, AUTH};

/// Optional settings file; every key may be omitted
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub path: Option<String>,
    pub user: Option<String>,
}

impl FileConfig {
    /// `$XDG_CONFIG_HOME/boa/config.toml` (or the platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("boa").join("config.toml"))
    }

    /// Load the default file, treating a missing file as empty.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub path: Option<String>,
    pub user: Option<String>,
    pub timeout_ms: Option<u64>,
}

/// Build the endpoint from overrides, falling back to the file then defaults.
pub fn resolve_endpoint(overrides: &Overrides, file: &FileConfig) -> Result<Endpoint> {
    let host = overrides.host.as_deref().or(file.host.as_deref()).unwrap_or(DEFAULT_HOST);
    let path = overrides.path.as_deref().or(file.path.as_deref()).unwrap_or(DEFAULT_PATH);
    let mut endpoint = Endpoint::new(host, path)?;
    if let Some(ms) = overrides.timeout_ms {
        endpoint = endpoint.with_timeout(Duration::from_millis(ms));
    }
    Ok(endpoint)
}

/// Username from overrides or the file; required.
pub fn resolve_user(overrides: &Overrides, file: &FileConfig) -> Result<String, ExitError> {
    overrides
        .user
        .clone()
        .or_else(|| file.user.clone())
        .filter(|user| !user.is_empty())
        .ok_or_else(|| ExitError::new(AUTH, "no username given: use --user or set BOA_USER"))
}

/// Password from `BOA_PASSWORD`; required.
pub fn password() -> Result<String, ExitError> {
    std::env::var("BOA_PASSWORD")
        .ok()
        .filter(|password| !password.is_empty())
        .ok_or_else(|| ExitError::new(AUTH, "BOA_PASSWORD is not set"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
