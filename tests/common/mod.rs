//! Common test utilities and fixtures for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the compiled rulepro binary.
pub fn rulepro_bin() -> &'static str {
    env!("CARGO_BIN_EXE_rulepro")
}

/// Creates a temporary directory for test fixtures.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Run the binary with the given args, using `dir` as the working directory.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(rulepro_bin())
        .current_dir(dir)
        .args(args)
        .env_remove("RULEPRO_CONFIG")
        .env_remove("RULEPRO_OUTPUT")
        .output()
        .expect("Failed to execute rulepro")
}

/// Write a manifest fixture into the temp dir and return its path.
pub fn write_manifest(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write manifest fixture");
    path
}

/// A small two-group manifest used across tests.
pub fn sample_manifest() -> &'static str {
    r#"{
  "name": "sample-app",
  "dependencies": {
    "react": "^16.13.1",
    "antd": "^4.3.4"
  },
  "devDependencies": {
    "parcel-bundler": "^1.12.4"
  }
}
"#
}

/// Write a rulepro.toml config fixture into the temp dir.
pub fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("rulepro.toml");
    std::fs::write(&path, content).expect("Failed to write config fixture");
    path
}
