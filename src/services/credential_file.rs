//! File-backed session credential store.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::config::config_dir;
use crate::ports::CredentialStore;

const CREDENTIALS_FILE: &str = "credentials.toml";

#[derive(Debug, Serialize, Deserialize)]
struct CredentialsFile {
    token: String,
}

/// Persists the admin session token as a small TOML document under
/// `$HOME/.config/jimmystore/`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store rooted at the default configuration directory.
    pub fn new_default() -> Result<Self, AppError> {
        Ok(Self { path: config_dir()?.join(CREDENTIALS_FILE) })
    }

    /// Create a store backed by a specific file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let parsed: CredentialsFile = toml::from_str(&raw).map_err(|e| {
            AppError::config_error(format!("Malformed {}: {}", self.path.display(), e))
        })?;
        Ok(Some(parsed.token))
    }

    fn store(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string(&CredentialsFile { token: token.to_string() })
            .map_err(|e| AppError::config_error(format!("Failed to encode credentials: {}", e)))?;
        fs::write(&self.path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
