//! # dockern Combined Cleanup Handler
//!
//! File: cli/src/commands/dockern.rs
//!
//! ## Overview
//!
//! Implements `dockern dockern`, which walks through images and volumes in a
//! single session and asks for one final confirmation before deleting
//! anything.
//!
//! ## Flow
//!
//! ```text
//! Init -> AskImages -> (ListImages | Skip) -> AskVolumes -> (ListVolumes | Skip)
//!      -> CheckAnySelected -> (Abort | ConfirmSummary) -> (Delete | Cancelled)
//! ```
//!
//! 1. "Do you want to delete images?" If yes, list images and show a checkbox
//!    (an empty listing prints `No images found.` and skips the checkbox).
//! 2. The same for volumes.
//! 3. If nothing was selected for either kind, print
//!    `No images or volumes selected for deletion. Exiting.` and stop.
//! 4. Print the selected images and volumes, then ask for confirmation.
//! 5. Confirmed: delete images first, then volumes. Declined: print
//!    `Deletion cancelled.` and delete nothing.
//!
//! A failed listing aborts the whole command, exactly as in `prune-images`.
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
use tracing::{debug, info};

/// Final confirmation shown above the selection summary.
const CONFIRM_DELETION: &str = "Are you sure you want to delete the selected resources?";

/// Where a `dockern` run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockernOutcome {
    /// Neither kind ended up with a selection.
    NothingSelected,
    /// The final confirmation was declined.
    Cancelled,
    /// Removals ran; a report is present for each kind that had a selection.
    Deleted {
        images: Option<DeletionReport>,
        volumes: Option<DeletionReport>,
    },
}

impl DockernOutcome {
    /// Number of removals that failed across both kinds.
    pub fn failures(&self) -> usize {
        match self {
            DockernOutcome::Deleted { images, volumes } => [images, volumes]
                .into_iter()
                .flatten()
                .map(|report| report.failed.len())
                .sum(),
            _ => 0,
        }
    }
}

/// Runs the combined images-then-volumes cleanup.
pub async fn handle_dockern<R, P, C>(
    docker: &DockerCli<'_, R>,
    prompter: &P,
    console: &C,
) -> Result<DockernOutcome>
where
    R: CommandRunner,
    P: Prompter,
    C: Console,
{
    info!("Handling dockern command");

    let images = choose(ResourceKind::Image, docker, prompter, console).await?;
    let volumes = choose(ResourceKind::Volume, docker, prompter, console).await?;

    if images.is_empty() && volumes.is_empty() {
        console.info("No images or volumes selected for deletion. Exiting.");
        return Ok(DockernOutcome::NothingSelected);
    }

    if !images.is_empty() {
        console.info(&format!("Selected images: {}", images.join(", ")));
    }
    if !volumes.is_empty() {
        console.info(&format!("Selected volumes: {}", volumes.join(", ")));
    }

    if !prompter
        .confirm(CONFIRM_DELETION)
        .context("Failed to confirm deletion")?
    {
        console.info("Deletion cancelled.");
        return Ok(DockernOutcome::Cancelled);
    }

    let images = remove_selected(ResourceKind::Image, docker, &images, console).await;
    let volumes = remove_selected(ResourceKind::Volume, docker, &volumes, console).await;
    Ok(DockernOutcome::Deleted { images, volumes })
}

/// Asks whether to handle `kind` at all, then lists and selects.
/// Returns an empty selection when the user opts out or nothing exists.
async fn choose<R, P, C>(
    kind: ResourceKind,
    docker: &DockerCli<'_, R>,
    prompter: &P,
    console: &C,
) -> Result<Vec<String>>
where
    R: CommandRunner,
    P: Prompter,
    C: Console,
{
    let wanted = prompter
        .confirm(&format!("Do you want to delete {}?", kind.plural()))
        .with_context(|| format!("Failed to ask about {}", kind.plural()))?;
    if !wanted {
        debug!("Skipping {}", kind.plural());
        return Ok(Vec::new());
    }

    let names = docker.list(kind).await?;
    if names.is_empty() {
        console.info(&format!("No {} found.", kind.plural()));
        return Ok(Vec::new());
    }

    prompter
        .checkbox(&format!("Select {} to delete", kind.plural()), &names)
        .with_context(|| format!("Failed to select {}", kind.plural()))
}

async fn remove_selected<R: CommandRunner, C: Console>(
    kind: ResourceKind,
    docker: &DockerCli<'_, R>,
    names: &[String],
    console: &C,
) -> Option<DeletionReport> {
    if names.is_empty() {
        return None;
    }
    Some(docker.remove_all(kind, names, console).await)
}
