//! # dockern Resource Removal
//!
//! File: cli/src/common/docker/removal.rs
//!
//! ## Overview
//!
//! Deletes selected images (`docker rmi <name>`) or volumes
//! (`docker volume rm <name>`) one at a time, in selection order.
//!
//! The client's stdout/stderr are inherited, so Docker's own explanation of a
//! failure ("image is being used by running container ...") reaches the user
//! directly. Only the exit code is inspected. Each item is isolated: a failed
//! removal prints `Failed to delete <kind>: <name>` and the loop moves on to
//! the next name. Nothing is rolled back or retried, and a failed item never
//! turns into an error for the caller.
//!
use super::{DockerCli, ResourceKind};
use crate::common::process::{CommandRunner, OutputMode};
use crate::common::ui::Console;
use tracing::{debug, info};

/// What happened to each name passed to `DockerCli::remove_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    /// Names the client removed, in attempt order.
    pub deleted: Vec<String>,
    /// Names whose removal exited non-zero or could not be started.
    pub failed: Vec<String>,
}

impl DeletionReport {
    /// Number of removals attempted.
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }
}

impl<R: CommandRunner> DockerCli<'_, R> {
    /// Removes one resource and writes the per-item result line to `console`.
    ///
    /// Returns `true` if the client exited 0.
    pub async fn remove<C: Console>(&self, kind: ResourceKind, name: &str, console: &C) -> bool {
        let removed = match self
            .runner
            .run(self.binary, &kind.remove_args(name), OutputMode::Inherit)
            .await
        {
            Ok(output) if output.success() => true,
            Ok(output) => {
                debug!("Removing {} '{}' exited with code {}", kind, name, output.code);
                false
            }
            Err(e) => {
                debug!("Could not run removal for {} '{}': {:?}", kind, name, e);
                false
            }
        };

        if removed {
            console.info(&format!("Deleted {}: {}", kind, name));
        } else {
            console.error(&format!("Failed to delete {}: {}", kind, name));
        }
        removed
    }

    /// Removes every name in `names`, sequentially and independently.
    pub async fn remove_all<C: Console>(
        &self,
        kind: ResourceKind,
        names: &[String],
        console: &C,
    ) -> DeletionReport {
        let mut report = DeletionReport::default();
        for name in names {
            if self.remove(kind, name, console).await {
                report.deleted.push(name.clone());
            } else {
                report.failed.push(name.clone());
            }
        }

        info!(
            "Removed {} of {} {}",
            report.deleted.len(),
            report.attempted(),
            kind.plural()
        );
        report
    }
}
