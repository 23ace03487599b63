//! Client configuration: z/OSMF timeouts, user agent, and list limits.
//!
//! Loaded from TOML with serde defaults for every field; `ZOWE_EXPLORER_*`
//! environment variables override file values.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::Result;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Settings for the built-in z/OSMF backend.
    #[serde(default)]
    pub zosmf: ZosmfClientConfig,
}

/// HTTP client settings for the z/OSMF backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZosmfClientConfig {
    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// User-Agent header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// `max-jobs` for job lists; 0 leaves it to the server.
    #[serde(default)]
    pub max_jobs: usize,
}

impl Default for ZosmfClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: default_user_agent(),
            max_jobs: 0,
        }
    }
}

impl ZosmfClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl ExplorerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            ApiError::Config { message, .. } => ApiError::Config {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ApiError::Config {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load from `path` if given, defaults otherwise, then apply env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_vars();
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(val) = std::env::var("ZOWE_EXPLORER_REQUEST_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.zosmf.request_timeout_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("ZOWE_EXPLORER_CONNECT_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.zosmf.connect_timeout_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("ZOWE_EXPLORER_USER_AGENT") {
            if !val.is_empty() {
                self.zosmf.user_agent = val;
            }
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("zowe-explorer-api/{}", env!("CARGO_PKG_VERSION"))
}
