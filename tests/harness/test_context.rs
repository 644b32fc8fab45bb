//! Shared testing harness for `n8n-setup` integration tests.

use assert_cmd::Command;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations and output.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Command for the binary, run inside the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(&self.work_dir)
    }

    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("n8n-setup").expect("Failed to locate n8n-setup binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.root.path()).env_remove("RUST_LOG");
        cmd
    }

    /// Write `stack.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("stack.toml"), content).expect("Failed to write stack.toml");
    }

    pub(crate) fn env_path(&self) -> PathBuf {
        self.work_dir.join(".env")
    }

    pub(crate) fn manifest_path(&self) -> PathBuf {
        self.work_dir.join("docker-compose.yml")
    }

    pub(crate) fn read_env(&self) -> String {
        fs::read_to_string(self.env_path()).expect("Failed to read .env")
    }

    /// Value of `key` in the generated `.env`, taken verbatim.
    pub(crate) fn env_value(&self, key: &str) -> Option<String> {
        let prefix = format!("{}=", key);
        self.read_env().lines().find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
    }

    pub(crate) fn read_manifest(&self) -> Value {
        let content = fs::read_to_string(self.manifest_path()).expect("Failed to read manifest");
        serde_yaml::from_str(&content).expect("Manifest should be valid YAML")
    }

    pub(crate) fn assert_no_artifacts(&self) {
        assert!(!self.env_path().exists(), ".env should not exist");
        assert!(!self.manifest_path().exists(), "docker-compose.yml should not exist");
    }

    /// Names of all entries in the work directory, sorted.
    pub(crate) fn work_dir_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
