//! # dockern Single-Kind Prune Handler
//!
//! File: cli/src/commands/prune.rs
//!
//! ## Overview
//!
//! Implements `dockern prune-images` and `dockern prune-volumes`. Both share
//! one flow, parameterized by `ResourceKind`:
//!
//! 1. List every resource of the kind through the Docker client. A failed
//!    listing aborts the command (and the program) with the client's exit code.
//! 2. If nothing is listed, print `No <kind>s found.` and stop.
//! 3. Show a checkbox prompt over the names.
//! 4. If nothing is ticked, print `No <kind>s selected for deletion.` and stop.
//! 5. Otherwise print the selection and delete the names one at a time.
//!    Per-item failures are reported but do not fail the command.
//!
//! ## Usage
//!
//! ```bash
//! dockern prune-images
//! dockern prune-volumes
//! ```
//!
use crate::{
    common::{
        docker::{DeletionReport, DockerCli, ResourceKind},
        process::CommandRunner,
        ui::{Console, Prompter},
    },
    core::error::Result,
};
use anyhow::Context;
use tracing::info;

/// Where a prune run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    /// The listing was empty; no prompt was shown.
    NoResources,
    /// The user ticked nothing; no removal was attempted.
    NothingSelected,
    /// Removals were attempted for the selection.
    Deleted(DeletionReport),
}

impl PruneOutcome {
    /// Number of removals that failed.
    pub fn failures(&self) -> usize {
        match self {
            PruneOutcome::Deleted(report) => report.failed.len(),
            _ => 0,
        }
    }
}

/// Lists, selects and deletes resources of one kind.
pub async fn handle_prune<R, P, C>(
    kind: ResourceKind,
    docker: &DockerCli<'_, R>,
    prompter: &P,
    console: &C,
) -> Result<PruneOutcome>
where
    R: CommandRunner,
    P: Prompter,
    C: Console,
{
    info!("Handling prune-{} command", kind.plural());

    let names = docker.list(kind).await?;
    if names.is_empty() {
        console.info(&format!("No {} found.", kind.plural()));
        return Ok(PruneOutcome::NoResources);
    }

    let selected = prompter
        .checkbox(&format!("Select {} to delete", kind.plural()), &names)
        .with_context(|| format!("Failed to select {}", kind.plural()))?;

    if selected.is_empty() {
        console.info(&format!("No {} selected for deletion.", kind.plural()));
        return Ok(PruneOutcome::NothingSelected);
    }

    console.info(&format!(
        "Selected {} for deletion: {}",
        kind.plural(),
        selected.join(", ")
    ));
    let report = docker.remove_all(kind, &selected, console).await;
    Ok(PruneOutcome::Deleted(report))
}
