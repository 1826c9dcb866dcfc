//! # dockern CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Besides locating
//! the compiled binary, this module can write a fake `docker` executable (a
//! small shell script) into a temporary directory. Tests pass it with
//! `--docker <path>` so no Docker daemon is needed. The script appends every
//! argument list it receives to `calls.log` next to itself, one call per line.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the compiled `dockern` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn dockern_cmd() -> Command {
    Command::cargo_bin("dockern").expect("Failed to find dockern binary for testing")
}

/// A fake Docker client living in its own temporary directory.
pub struct FakeDocker {
    dir: TempDir,
    script: PathBuf,
}

impl FakeDocker {
    /// Writes a `/bin/sh` script whose body is `body`. Every invocation is
    /// logged before `body` runs.
    #[cfg(unix)]
    pub fn new(body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let script = dir.path().join("docker");
        let log = dir.path().join("calls.log");
        let contents = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n{}\n",
            log.display(),
            body
        );
        fs::write(&script, contents).expect("Failed to write fake docker");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake docker executable");
        Self { dir, script }
    }

    /// Path to pass as `--docker`.
    pub fn path(&self) -> &Path {
        &self.script
    }

    /// Argument lists the script was called with, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `dockern` preconfigured to use this fake client.
    pub fn dockern(&self) -> Command {
        let mut cmd = dockern_cmd();
        cmd.arg("--docker").arg(self.path());
        cmd
    }
}
