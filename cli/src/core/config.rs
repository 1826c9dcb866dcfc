//! # dockern Runtime Settings
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! dockern reads no configuration file. The only runtime setting, the Docker
//! client executable, comes from the global `--docker` option. This module
//! resolves that option into a validated `Settings` value before any command
//! runs, so the handlers never see an unusable path.
//!
//! ```rust
//! let settings = config::Settings::resolve(&cli.docker)?;
//! let docker = DockerCli::new(&runner, &settings.docker_bin);
//! ```
//!
use crate::core::error::{DockernError, Result};
use tracing::debug;

/// Docker client used when `--docker` is not given.
pub const DEFAULT_DOCKER_BIN: &str = "docker";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Executable invoked for every listing and removal.
    pub docker_bin: String,
}

impl Settings {
    /// Builds settings from the raw `--docker` value, rejecting blank paths.
    pub fn resolve(docker_bin: &str) -> Result<Self> {
        let docker_bin = docker_bin.trim();
        if docker_bin.is_empty() {
            return Err(DockernError::Config(
                "Docker client path must not be empty".to_string(),
            )
            .into());
        }
        let settings = Self {
            docker_bin: docker_bin.to_string(),
        };
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}
