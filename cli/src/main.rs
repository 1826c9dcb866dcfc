//! # dockern Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! dockern lists local Docker images or volumes, lets the user tick the ones
//! to delete in a checkbox prompt, and removes them through the Docker client.
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Wiring the real process runner and terminal prompts into the handlers
//! - Turning errors into messages and exit codes
//!
//! ## Examples
//!
//! ```bash
//! # Pick images to delete
//! dockern prune-images
//!
//! # Pick volumes to delete, with debug logging
//! dockern -vv prune-volumes
//!
//! # Images and volumes in one session, against a different client binary
//! dockern --docker /usr/local/bin/docker dockern
//! ```
//!
//! Exit codes: a failed `docker images` / `docker volume ls` exits with the
//! client's own code after printing its stderr. Other errors exit 1. Failed
//! removals of individual resources are reported but still exit 0.
//!
use clap::{Parser, Subcommand};
use tracing::{debug, error, warn};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (prune, dockern)
mod common; // Process runner, Docker client wrapper, prompts
mod core; // Errors and runtime settings

use crate::common::{
    docker::{DockerCli, ResourceKind},
    process::SystemRunner,
    ui::{DialoguerPrompter, TerminalConsole},
};
use crate::core::{
    config::{Settings, DEFAULT_DOCKER_BIN},
    error::{self, DockernError},
};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dockern",
    about = "Interactively pick Docker images and volumes to delete",
    long_about = "Lists local Docker images or volumes, lets you tick the ones to delete,\n\
                  and removes them one by one with the Docker command-line client.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Docker client executable to invoke.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DOCKER_BIN, global = true)]
    docker: String,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List and delete selected docker images.
    PruneImages,
    /// List and delete selected docker volumes.
    PruneVolumes,
    /// Choose images and volumes to delete, then confirm once.
    Dockern,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        let code = error::exit_code(&e);
        match e.downcast_ref::<DockernError>() {
            Some(DockernError::ListingFailed { stderr, .. }) => {
                debug!("{}", e);
                eprintln!("{}", stderr.trim_end());
            }
            _ => {
                error!("Command execution failed: {:?}", e);
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(code);
    }

    Ok(())
}

/// Resolves settings and dispatches to the chosen subcommand.
async fn run(cli: Cli) -> error::Result<()> {
    let settings = Settings::resolve(&cli.docker)?;
    let runner = SystemRunner;
    let prompter = DialoguerPrompter::default();
    let console = TerminalConsole;
    let docker = DockerCli::new(&runner, &settings.docker_bin);

    let failures = match cli.command {
        Commands::PruneImages => {
            commands::prune::handle_prune(ResourceKind::Image, &docker, &prompter, &console)
                .await?
                .failures()
        }
        Commands::PruneVolumes => {
            commands::prune::handle_prune(ResourceKind::Volume, &docker, &prompter, &console)
                .await?
                .failures()
        }
        Commands::Dockern => {
            commands::dockern::handle_dockern(&docker, &prompter, &console)
                .await?
                .failures()
        }
    };

    if failures > 0 {
        warn!("{} removal(s) failed", failures);
    }
    Ok(())
}
