/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Application configuration loaded from `app.yaml` in the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Candidate file names, tried in order relative to the working directory.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["app.yaml", "app.yml"];

/// Address the HTTP server binds to.
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config file found (searched: {})", .searched.join(", "))]
    NotFound { searched: Vec<String> },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("server.endpoint is not a valid URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Configuration for the gateway. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    /// PEM certificate (or public key) whose key signs Casdoor access tokens.
    pub certificate: String,
}

/// Casdoor connection settings, the `server` section of `app.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Casdoor base URL (e.g. "https://door.casdoor.com").
    pub endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    pub organization: String,
    pub application: String,
}

impl Config {
    /// Find and parse the config file from the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = CONFIG_FILE_NAMES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
            .ok_or_else(|| ConfigError::NotFound {
                searched: CONFIG_FILE_NAMES.iter().map(|s| s.to_string()).collect(),
            })?;
        tracing::info!("Using config file {}", path.display());
        Self::from_path(&path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(raw)?;
        config.server.endpoint_url()?;
        Ok(config)
    }
}

impl ServerConfig {
    /// The endpoint parsed as a URL, without a trailing slash in its path.
    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.endpoint.trim_end_matches('/'))
    }
}
