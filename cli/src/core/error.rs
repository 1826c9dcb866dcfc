//! # dockern Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout dockern and the single
//! place where an error is turned into a process exit code.
//!
//! ## Architecture
//!
//! - `DockernError`: a `thiserror` enum for the failures that need distinct handling.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so any layer can attach context.
//! - `exit_code`: maps an error reaching `main` to the code the process exits with.
//!
//! Only a failed *listing* is fatal with the Docker client's own exit code. A
//! failed *deletion* is never an error at this level; it is reported per item by
//! `common::docker::removal` and the batch continues.
//!
//! ## Examples
//!
//! ```rust
//! match docker.list(ResourceKind::Image).await {
//!     Ok(names) => println!("{} images", names.len()),
//!     Err(e) => std::process::exit(error::exit_code(&e)),
//! }
//! ```
//!
use crate::common::docker::ResourceKind;
use thiserror::Error;

/// Custom error type for dockern.
#[derive(Error, Debug)]
pub enum DockernError {
    /// `docker images` / `docker volume ls` exited non-zero. `stderr` holds the
    /// client's decoded error output, printed verbatim before exiting.
    #[error("Failed to list docker {} (exit code {})", .kind.plural(), .code)]
    ListingFailed {
        kind: ResourceKind,
        code: i32,
        stderr: String,
    },

    #[error("Prompt interaction failed: {source}")]
    Prompt {
        #[from]
        source: dialoguer::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Exit code used for every failure that does not carry its own.
pub const GENERIC_FAILURE: i32 = 1;

/// Returns the process exit code for an error that reached `main`.
///
/// A listing failure exits with the Docker client's code; everything else exits 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DockernError>() {
        Some(DockernError::ListingFailed { code, .. }) => *code,
        _ => GENERIC_FAILURE,
    }
}
