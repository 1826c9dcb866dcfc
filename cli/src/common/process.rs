//! # dockern Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! This module runs external programs (in practice, the Docker client) and
//! reports how they finished. It is the only place in dockern that spawns a
//! child process.
//!
//! ## Architecture
//!
//! - **`CommandRunner`**: the seam between dockern and the operating system.
//!   The Docker layer is written against this trait so tests can substitute a
//!   scripted runner.
//! - **`SystemRunner`**: the real implementation, built on `tokio::process::Command`.
//!   The child inherits the environment and the future resolves when it exits.
//! - **`OutputMode`**: whether stdout/stderr are captured for parsing or
//!   inherited so the child writes straight to the terminal.
//! - **`CommandOutput`**: exit code plus any captured text.
//!
//! A non-zero exit code is **not** an error here. Callers inspect
//! `CommandOutput::code` and decide whether to abort or carry on. Only a
//! failure to spawn or wait on the child is returned as `Err`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process::{CommandRunner, OutputMode, SystemRunner};
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! let args = vec!["volume".to_string(), "ls".to_string()];
//! let output = SystemRunner.run("docker", &args, OutputMode::Capture).await?;
//! if output.success() {
//!     println!("{}", output.stdout);
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, GENERIC_FAILURE};
use anyhow::Context;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

/// How the child's stdout and stderr are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Pipe both streams and return them decoded as text.
    Capture,
    /// Let the child write directly to this process's stdout/stderr.
    Inherit,
}

/// The result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code. A child killed by a signal reports `GENERIC_FAILURE`.
    pub code: i32,
    /// Captured stdout, lossily decoded. Empty for `OutputMode::Inherit`.
    pub stdout: String,
    /// Captured stderr, lossily decoded. Empty for `OutputMode::Inherit`.
    pub stderr: String,
}

impl CommandOutput {
    /// `true` when the child exited with code 0.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs an external program to completion.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Spawns `program` with `args`, waits for it, and reports its exit code
    /// and (for `OutputMode::Capture`) its output.
    ///
    /// ## Errors
    ///
    /// Returns `Err` only if the program could not be spawned or awaited.
    async fn run(&self, program: &str, args: &[String], mode: OutputMode)
        -> Result<CommandOutput>;
}

/// `CommandRunner` backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        mode: OutputMode,
    ) -> Result<CommandOutput> {
        debug!("Running `{} {}` ({:?})", program, args.join(" "), mode);

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::inherit());

        let output = match mode {
            OutputMode::Capture => {
                let output = command
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .await
                    .with_context(|| format!("Failed to execute `{}`", program))?;
                CommandOutput {
                    code: output.status.code().unwrap_or(GENERIC_FAILURE),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
            OutputMode::Inherit => {
                let status = command
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .await
                    .with_context(|| format!("Failed to execute `{}`", program))?;
                CommandOutput {
                    code: status.code().unwrap_or(GENERIC_FAILURE),
                    ..CommandOutput::default()
                }
            }
        };

        trace!("`{}` exited with code {}", program, output.code);
        Ok(output)
    }
}
