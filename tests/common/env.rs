//! Test environment builder for isolated BFG testing.
//!
//! Provides `TestEnv` - a tool root and a fake home in temp directories,
//! plus helpers to run the `bfg` binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::TEMPLATE;

/// Result of running a BFG CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Tool root passed to bfg through BFG_ROOT
    pub tool_root: TempDir,
    /// Temporary directory for HOME / XDG dirs
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Empty tool root, no template installed
    pub fn new() -> Self {
        Self {
            tool_root: TempDir::new().expect("Failed to create tool root"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    /// Tool root with the test template installed
    pub fn with_template() -> Self {
        let env = Self::new();
        env.write_root_file("__template__.stan", TEMPLATE);
        env
    }

    /// Get path relative to the tool root
    pub fn root_path(&self, relative: &str) -> PathBuf {
        self.tool_root.path().join(relative)
    }

    /// Write a file below the tool root
    pub fn write_root_file(&self, relative: &str, content: &str) {
        let full_path = self.root_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run bfg with BFG_ROOT pointing at the tool root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run bfg with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.env("BFG_ROOT", self.tool_root.path()).args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("Failed to execute bfg"))
    }

    /// Run bfg without BFG_ROOT, from `cwd`
    pub fn run_without_root(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = self.command();
        cmd.current_dir(cwd).args(args);
        to_result(cmd.output().expect("Failed to execute bfg"))
    }

    fn command(&self) -> Command {
        let home = self.home_dir.path();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bfg"));
        cmd.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("XDG_DATA_HOME", home.join(".local/share"))
            .env("BFG_NO_COLOR", "1")
            .env_remove("BFG_ROOT")
            .env_remove("BFG_MODELS_DIR")
            .env_remove("BFG_TEMPLATE")
            .env_remove("BFG_EXTENSION")
            .env_remove("BFG_MAKE")
            .env_remove("CMDSTAN");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
