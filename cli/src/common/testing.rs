//! Scripted stand-ins for the process runner and the terminal prompts, used by
//! unit tests across the crate.

use crate::common::process::{CommandOutput, CommandRunner, OutputMode};
use crate::common::ui::{Console, Prompter};
use crate::core::error::Result;
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Records every invocation. Listing calls (captured output) are answered
/// from a queue in order; removal calls succeed unless the name was marked
/// as failing.
#[derive(Default)]
pub struct FakeRunner {
    listings: Mutex<VecDeque<CommandOutput>>,
    failing: Vec<String>,
    unspawnable: Vec<String>,
    calls: Mutex<Vec<(String, OutputMode)>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful listing printing `stdout`.
    pub fn on_list(self, stdout: &str) -> Self {
        self.on_list_output(CommandOutput {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }

    pub fn on_list_output(self, output: CommandOutput) -> Self {
        self.listings.lock().unwrap().push_back(output);
        self
    }

    /// Removal of `name` exits with code 1.
    pub fn failing_removal(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    /// Removal of `name` fails to spawn.
    pub fn unspawnable_removal(mut self, name: &str) -> Self {
        self.unspawnable.push(name.to_string());
        self
    }

    /// Every invocation as `"<program> <args...>"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(line, _)| line.clone())
            .collect()
    }

    /// Invocations made with inherited output, i.e. removals.
    pub fn removal_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, mode)| *mode == OutputMode::Inherit)
            .map(|(line, _)| line.clone())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        mode: OutputMode,
    ) -> Result<CommandOutput> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.lock().unwrap().push((line.clone(), mode));

        match mode {
            OutputMode::Capture => self
                .listings
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| anyhow!("unscripted listing call: {}", line)),
            OutputMode::Inherit => {
                let name = args.last().map(String::as_str).unwrap_or_default();
                if self.unspawnable.iter().any(|n| n == name) {
                    return Err(anyhow!("spawn failed for {}", line));
                }
                let code = if self.failing.iter().any(|n| n == name) { 1 } else { 0 };
                Ok(CommandOutput {
                    code,
                    ..CommandOutput::default()
                })
            }
        }
    }
}

/// Answers prompts from queues and records every message shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    confirms: Mutex<VecDeque<bool>>,
    selections: Mutex<VecDeque<Vec<String>>>,
    shown: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next confirm prompt.
    pub fn confirm_with(self, answer: bool) -> Self {
        self.confirms.lock().unwrap().push_back(answer);
        self
    }

    /// Queues the names ticked at the next checkbox prompt.
    pub fn select(self, names: &[&str]) -> Self {
        self.selections
            .lock()
            .unwrap()
            .push_back(names.iter().map(|n| n.to_string()).collect());
        self
    }

    /// Messages of every prompt shown so far.
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn checkbox(&self, message: &str, options: &[String]) -> Result<Vec<String>> {
        self.shown.lock().unwrap().push(message.to_string());
        let chosen = self
            .selections
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("unscripted checkbox: {}", message))?;
        Ok(options
            .iter()
            .filter(|o| chosen.contains(*o))
            .cloned()
            .collect())
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        self.shown.lock().unwrap().push(message.to_string());
        self.confirms
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("unscripted confirm: {}", message))
    }
}

/// Which stream a `RecordingConsole` line was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Keeps every console line with the stream it went to.
#[derive(Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<(Stream, String)>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line in write order, tagged with its stream.
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.on(Stream::Stdout)
    }

    pub fn stderr(&self) -> Vec<String> {
        self.on(Stream::Stderr)
    }

    fn on(&self, stream: Stream) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl Console for RecordingConsole {
    fn info(&self, line: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((Stream::Stdout, line.to_string()));
    }

    fn error(&self, line: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((Stream::Stderr, line.to_string()));
    }
}
