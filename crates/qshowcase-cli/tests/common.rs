//! Shared fixture for CLI integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolates each run from the user's config and log settings
pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    pub fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("qshowcase").expect("Failed to find binary");
        cmd.env("QSHOWCASE_CONFIG", &self.config_path)
            .env_remove("QSHOWCASE_LOG")
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .arg("--color")
            .arg("never");
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = args.to_vec();
        full.extend(["--format", "json"]);
        serde_json::from_str(&self.stdout(&full)).expect("Parse failed")
    }
}
