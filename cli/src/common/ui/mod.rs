//! # dockern Terminal Prompts (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Interactive prompts used by the prune commands:
//!
//! - **Checkbox**: a multi-select list of resource names; returns the names
//!   the user ticked, in display order.
//! - **Confirm**: a yes/no question defaulting to "no".
//!
//! User-facing result lines ("Deleted image: ...", "No volumes found.") go
//! through the `Console` trait: `info` lines to stdout, `error` lines to
//! stderr. `TerminalConsole` writes to the real streams.
//!
//! Both prompts go through the `Prompter` trait. `DialoguerPrompter` is the terminal
//! implementation; tests drive the command handlers with a scripted prompter
//! instead. Dismissing a prompt (Esc or `q`) is treated as an empty selection
//! or a "no", never as an error. A prompt that cannot talk to a terminal at
//! all returns `DockernError::Prompt`.
//!
//! ```rust
//! let prompter = DialoguerPrompter::default();
//! if prompter.confirm("Do you want to delete images?")? {
//!     let picked = prompter.checkbox("Select images to delete", &images)?;
//! }
//! ```
//!
use crate::core::error::{DockernError, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect};
use tracing::debug;

/// Blocking terminal interaction.
pub trait Prompter {
    /// Shows `options` as a checkbox list and returns the chosen ones in display order.
    fn checkbox(&self, message: &str, options: &[String]) -> Result<Vec<String>>;

    /// Asks a yes/no question.
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Destination for user-facing result lines.
pub trait Console {
    /// A normal result line, written to stdout.
    fn info(&self, line: &str);

    /// A failure line, written to stderr.
    fn error(&self, line: &str);
}

/// `Console` backed by the process's stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn info(&self, line: &str) {
        println!("{}", line);
    }

    fn error(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// `Prompter` that renders with `dialoguer`.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn checkbox(&self, message: &str, options: &[String]) -> Result<Vec<String>> {
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .interact_opt()
            .map_err(DockernError::from)?;

        let selection = picked_items(options, picked.unwrap_or_default());
        debug!("Checkbox '{}' returned {:?}", message, selection);
        Ok(selection)
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .map_err(DockernError::from)?
            .unwrap_or(false);
        debug!("Confirm '{}' answered {}", message, answer);
        Ok(answer)
    }
}

/// Maps checkbox indices back to names, in display order.
fn picked_items(options: &[String], mut indices: Vec<usize>) -> Vec<String> {
    indices.sort_unstable();
    indices.dedup();
    indices
        .into_iter()
        .filter_map(|i| options.get(i).cloned())
        .collect()
}
