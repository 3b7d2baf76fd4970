//! Shared testing utilities for jimmystore CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `jimmystore` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("jimmystore").expect("Failed to locate jimmystore binary");
        cmd.env("HOME", self.home());
        cmd
    }

    /// Build a command pointed at a specific API endpoint.
    pub fn cli_with_api(&self, api_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("JIMMYSTORE_API_URL", api_url);
        cmd
    }

    /// Path to the stored credentials file inside the emulated home.
    pub fn credentials_path(&self) -> PathBuf {
        self.home().join(".config").join("jimmystore").join("credentials.toml")
    }

    /// Seed a stored admin token without going through login.
    pub fn write_token(&self, token: &str) {
        let path = self.credentials_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config directory");
        fs::write(path, format!("token = \"{}\"\n", token)).expect("Failed to write credentials");
    }
}
