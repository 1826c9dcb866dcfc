//! # dockern Resource Listing
//!
//! File: cli/src/common/docker/listing.rs
//!
//! ## Overview
//!
//! Lists local images (`docker images --format {{.Repository}}:{{.Tag}}`) or
//! volumes (`docker volume ls --format {{.Name}}`) and turns the client's
//! line-oriented output into resource names.
//!
//! A non-zero exit from the client is fatal: `list` returns
//! `DockernError::ListingFailed` carrying the exit code and stderr, and `main`
//! exits with that code. An empty listing is zero names, never one blank name.
//!
use super::{DockerCli, ResourceKind};
use crate::common::process::{CommandRunner, OutputMode};
use crate::core::error::{DockernError, Result};
use tracing::{debug, info};

impl<R: CommandRunner> DockerCli<'_, R> {
    /// Lists every resource of `kind` on the host, in the client's order.
    ///
    /// ## Errors
    ///
    /// * `DockernError::ListingFailed` if the client exits non-zero.
    /// * Any spawn error from the runner (e.g. the client is not installed).
    pub async fn list(&self, kind: ResourceKind) -> Result<Vec<String>> {
        let output = self
            .runner
            .run(self.binary, &kind.list_args(), OutputMode::Capture)
            .await?;

        if !output.success() {
            debug!(
                "Listing {} failed with code {}: {}",
                kind.plural(),
                output.code,
                output.stderr.trim_end()
            );
            return Err(DockernError::ListingFailed {
                kind,
                code: output.code,
                stderr: output.stderr,
            }
            .into());
        }

        let names = parse_listing(&output.stdout);
        info!("Found {} {}", names.len(), kind.plural());
        Ok(names)
    }
}

/// Splits client output into resource names.
///
/// Every line is trimmed on both sides (`\r` included) and blank lines are
/// dropped, so `""` and whitespace-only output give an empty list.
pub fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
