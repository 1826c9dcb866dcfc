//! # dockern Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: resolution and validation of runtime settings
//! - `error`: error types and the error-to-exit-code mapping
//!
//! ```rust
//! use crate::core::config::Settings;
//! use crate::core::error::{DockernError, Result};
//! ```
//!
pub mod config;
pub mod error;
