//! Webhook server configuration.
//!
//! Loaded in layers: built-in defaults, then an optional `palaver.toml`
//! file, then `PALAVER_`-prefixed environment variables (nested keys use
//! `__`, e.g. `PALAVER_BASIC_AUTH__USERNAME`).
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! path = "/webhook"
//!
//! [basic_auth]
//! username = "agent"
//! password = "hunter2"
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::BasicAuth;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested configuration file does not exist.
    #[error("configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Extraction from the layered sources failed.
    #[error("failed to load configuration: {0}")]
    Extract(#[from] figment::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for the webhook HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Bind address (default: "0.0.0.0").
    pub host: String,

    /// Listen port (default: 8080).
    pub port: u16,

    /// Path the webhook endpoint is registered at (default: "/webhook").
    pub path: String,

    /// Basic-auth credentials; auth is enabled only when set.
    pub basic_auth: Option<BasicAuth>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            path: "/webhook".to_string(),
            basic_auth: None,
        }
    }
}

impl ServeConfig {
    /// Returns the bind address string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loads configuration from `palaver.toml` in the working directory
    /// (if present) layered under `PALAVER_` environment variables.
    pub fn load() -> ConfigResult<Self> {
        Ok(Self::layered(Toml::file("palaver.toml")).extract()?)
    }

    /// Loads configuration from a specific TOML file plus `PALAVER_`
    /// environment variables.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Ok(Self::layered(Toml::file(path)).extract()?)
    }

    fn layered(file: figment::providers::Data<Toml>) -> Figment {
        Figment::from(Serialized::defaults(ServeConfig::default()))
            .merge(file)
            .merge(Env::prefixed("PALAVER_").split("__"))
    }
}
