//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated working and config directory
//! - Command builder helpers for common patterns
//! - Script and config file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment cannot leak in.
const MARKS_VARS: [&str; 5] = [
    "MARKS_SAMPLE_DATA",
    "MARKS_HISTORY_LIMIT",
    "MARKS_OUTPUT_FORMAT",
    "MARKS_LOG_MODE",
    "MARKS_CONFIG_DIR",
];

/// Test environment with isolated directories.
///
/// This struct provides an isolated test environment with:
/// - A temporary working directory (where `marks.yaml` is looked up)
/// - A separate user config directory passed via `--config-dir`
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user config directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("user-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The command runs in the temp directory with `HOME` pointed at it and
    /// every `MARKS_*` variable removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("marks").expect("Failed to find marks binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in MARKS_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Run the shell with `input` on stdin.
    pub fn shell(&self, input: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("shell").write_stdin(input.to_string());
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a script file and return its path.
    pub fn write_script(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.temp_path.join(name);
        let mut content = lines.join("\n");
        content.push('\n');
        std::fs::write(&path, content).expect("Failed to write script");
        path
    }

    /// Write the user config file.
    pub fn write_user_config(&self, content: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), content)
            .expect("Failed to write user config");
    }

    /// Write `marks.yaml` in the working directory.
    pub fn write_local_config(&self, content: &str) {
        std::fs::write(self.temp_path.join("marks.yaml"), content)
            .expect("Failed to write local config");
    }

    /// Run shell input and return stdout, asserting success.
    pub fn shell_stdout(&self, input: &str) -> String {
        let output = self.shell(input).output().expect("Failed to run shell");

        assert!(
            output.status.success(),
            "Shell failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
