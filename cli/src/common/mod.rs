//! # dockern Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers in `commands::`:
//!
//! - **`process`**: runs external programs and reports exit code and output.
//! - **`docker`**: lists and removes images/volumes through the Docker client.
//! - **`ui`**: checkbox and confirmation prompts.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{docker::{DockerCli, ResourceKind}, process::SystemRunner, ui::DialoguerPrompter};
//! ```
//!

/// Lists and removes Docker images and volumes via the Docker client.
pub mod docker;
/// Runs external processes (the Docker client).
pub mod process;
/// Interactive terminal prompts.
pub mod ui;

/// Scripted runner and prompter for unit tests.
#[cfg(test)]
pub mod testing;
