//! # dockern Docker Client Wrapper (`common::docker`)
//!
//! File: cli/src/common/docker/mod.rs
//!
//! ## Overview
//!
//! dockern drives the Docker *command-line client*, not the Engine API. This
//! module holds the two pieces every Docker call needs:
//!
//! - **`ResourceKind`**: images or volumes. Each kind knows the exact client
//!   arguments for listing and removing, plus the words used in messages, so
//!   a single routine serves both kinds.
//! - **`DockerCli`**: pairs a `CommandRunner` with the client executable. The
//!   operations themselves live in the submodules:
//!   - `listing`: `DockerCli::list` and the pure `parse_listing` helper.
//!   - `removal`: `DockerCli::remove` and `DockerCli::remove_all`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::docker::{DockerCli, ResourceKind};
//! use crate::common::process::SystemRunner;
//! use crate::common::ui::TerminalConsole;
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! let runner = SystemRunner;
//! let docker = DockerCli::new(&runner, "docker");
//! let volumes = docker.list(ResourceKind::Volume).await?;
//! let report = docker
//!     .remove_all(ResourceKind::Volume, &volumes, &TerminalConsole)
//!     .await;
//! println!("{} removed", report.deleted.len());
//! # Ok(())
//! # }
//! ```
//!
use crate::common::process::CommandRunner;
use std::fmt;

pub mod listing;
pub mod removal;

pub use removal::DeletionReport;

/// A kind of Docker resource dockern can list and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Volume,
}

impl ResourceKind {
    /// Singular noun used in per-item messages ("Deleted image: ...").
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Volume => "volume",
        }
    }

    /// Plural noun used in prompts and summaries ("Select images to delete").
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Image => "images",
            ResourceKind::Volume => "volumes",
        }
    }

    /// Client arguments that print one resource name per line.
    pub fn list_args(self) -> Vec<String> {
        let args: &[&str] = match self {
            ResourceKind::Image => &["images", "--format", "{{.Repository}}:{{.Tag}}"],
            ResourceKind::Volume => &["volume", "ls", "--format", "{{.Name}}"],
        };
        args.iter().map(|a| a.to_string()).collect()
    }

    /// Client arguments that delete the resource called `name`.
    pub fn remove_args(self, name: &str) -> Vec<String> {
        let prefix: &[&str] = match self {
            ResourceKind::Image => &["rmi"],
            ResourceKind::Volume => &["volume", "rm"],
        };
        prefix
            .iter()
            .map(|a| a.to_string())
            .chain(std::iter::once(name.to_string()))
            .collect()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The Docker client as seen through a `CommandRunner`.
pub struct DockerCli<'a, R: CommandRunner> {
    runner: &'a R,
    binary: &'a str,
}

impl<'a, R: CommandRunner> DockerCli<'a, R> {
    pub fn new(runner: &'a R, binary: &'a str) -> Self {
        Self { runner, binary }
    }
}
