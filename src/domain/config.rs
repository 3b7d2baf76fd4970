//! Client configuration for the inventory service endpoint.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;

/// Environment override for the inventory service endpoint.
pub const API_URL_ENV: &str = "JIMMYSTORE_API_URL";

const CONFIG_FILE: &str = "config.toml";

/// Inventory service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreApiConfig {
    /// Inventory service base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for StoreApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl StoreApiConfig {
    /// Load from `$HOME/.config/jimmystore/config.toml`, falling back
    /// to defaults. `JIMMYSTORE_API_URL` overrides the endpoint.
    pub fn load() -> Result<Self, AppError> {
        let mut config = match config_dir() {
            Ok(dir) => {
                let path = dir.join(CONFIG_FILE);
                if path.exists() {
                    let raw = fs::read_to_string(&path)?;
                    toml::from_str(&raw).map_err(|e| {
                        AppError::config_error(format!("Malformed {}: {}", path.display(), e))
                    })?
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }

        Ok(config)
    }
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Configuration directory under the user's HOME.
///
/// Uses $HOME/.config/jimmystore for consistency across platforms and
/// tests.
pub(crate) fn config_dir() -> Result<PathBuf, AppError> {
    let home = std::env::var("HOME")
        .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("jimmystore"))
}
