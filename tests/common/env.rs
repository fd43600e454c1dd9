//! Test environment for running the asmforge binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of one CLI invocation
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON: {l:?} ({e})\nstdout:\n{}", self.stdout))
            })
            .collect()
    }

    /// The last JSON object on stdout.
    pub fn last_json(&self) -> serde_json::Value {
        self.json_lines()
            .pop()
            .unwrap_or_else(|| panic!("no JSON output\nstderr:\n{}", self.stderr))
    }
}

/// Isolated project and home directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    env_vars: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
            env_vars: Vec::new(),
        }
    }

    /// Environment variable passed to every run.
    pub fn with_env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.env_vars.push((
            key.to_string(),
            value.as_ref().to_string_lossy().into_owned(),
        ));
        self
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("read {relative}: {e}"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_path(relative).exists()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], extra: &[(&str, &str)]) -> TestResult {
        self.run_from(self.root(), args, extra)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], extra: &[(&str, &str)]) -> TestResult {
        let home = self.home_dir.path();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_asmforge"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("BUILD_MODE")
            .env_remove("CONTINUE_ON_TEST_FAILURE")
            .env_remove("ASMFORGE_COLOR");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        for (key, value) in extra {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("failed to execute asmforge"))
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
