//! Front-end configuration.
//!
//! Resolution order for the API base URL, highest first:
//! 1. `--api-base` on the command line (applied by the caller),
//! 2. the `SALARY_API_URL` environment variable,
//! 3. `api_base` in the TOML file passed with `--config`,
//! 4. [`DEFAULT_API_BASE`].

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use salary_core::service::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, ServiceConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "SALARY_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings read from the optional TOML file.
///
/// ```toml
/// api_base = "http://localhost:5000"
/// timeout_secs = 60
/// log_level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base: String,
    pub timeout_secs: u64,
    /// Any `EnvFilter` directive; `RUST_LOG` still wins when set.
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Reads `path` when given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies environment overrides. `lookup` is `std::env::var` in
    /// production and a map in tests.
    pub fn apply_env<F>(
        &mut self,
        lookup: F,
    ) where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.api_base = url;
        }
    }

    /// Applies a command-line override of the base URL.
    pub fn apply_api_base(
        &mut self,
        api_base: Option<String>,
    ) {
        if let Some(url) = api_base {
            self.api_base = url;
        }
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: self.api_base.clone(),
            timeout_secs: self.timeout_secs,
            ..Default::default()
        }
    }
}
