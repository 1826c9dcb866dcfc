//! # dockern Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Handlers for the top-level subcommands. Each handler receives a `DockerCli`
//! and a `Prompter` from `main.rs`, so the same code runs against the real
//! Docker client and terminal or against scripted fakes in tests.
//!
//! ## Commands
//!
//! - `prune`: `prune-images` and `prune-volumes` (one resource kind per run)
//! - `dockern`: the combined images-then-volumes flow with a final confirmation
//!

/// The combined images-and-volumes cleanup (`dockern dockern`).
pub mod dockern;
/// Single-kind cleanup (`dockern prune-images`, `dockern prune-volumes`).
pub mod prune;
