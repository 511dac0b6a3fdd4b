//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment (temporary data directory) and
//! helpers for the command patterns the tests repeat.

use assert_cmd::Command;
use chrono::{Days, Local};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the campsite data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created up front; the CLI initializes it
    /// on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("campsite-data");

        Self { temp_dir, data_dir }
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("campsite").expect("Failed to find campsite binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("CAMPSITE_DATA_DIR");
        cmd.env_remove("CAMPSITE_BUSY_TIMEOUT");
        cmd.env_remove("CAMPSITE_DISABLE_AUTOINIT");
        cmd.env_remove("CAMPSITE_LOG_MODE");
        cmd
    }

    /// Reserve a stay and return the printed reservation id.
    ///
    /// # Panics
    ///
    /// Panics if the reserve command fails.
    pub fn reserve(&self, name: &str, from: &str, to: &str) -> String {
        let output = self
            .command()
            .args([
                "reserve",
                "--name",
                name,
                "--email",
                &format!("{}@example.com", name.replace(' ', ".")),
                "--from",
                from,
                "--to",
                to,
            ])
            .output()
            .expect("failed to run reserve");
        assert!(
            output.status.success(),
            "reserve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// List reservations as a single string.
    pub fn list(&self) -> String {
        let output = self
            .command()
            .arg("list")
            .output()
            .expect("failed to run list");
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    }
}

/// A date `offset` days from today, formatted as the CLI expects.
#[allow(dead_code)]
pub fn day(offset: u64) -> String {
    (Local::now().date_naive() + Days::new(offset)).to_string()
}
