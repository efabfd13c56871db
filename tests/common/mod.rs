//! Shared helpers for CLI end-to-end tests.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Runs the `topopts` binary with the given arguments and captures output.
pub fn spawn_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_topopts"))
        .args(args)
        .output()
        .expect("failed to spawn topopts binary")
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write config fixture");
    path
}
