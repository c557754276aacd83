//! Command dispatch.
//!
//! This module provides:
//! - [`CommandInterpreter`], a table from command name to [`Handler`]
//! - [`CommandOutput`] / [`Reply`] for handler results
//! - [`CommandInterpreter::with_builtins`] for the standard command set
//!
//! # Architecture
//!
//! A line is split on its first whitespace run into a command name and a
//! single optional argument. Every handler has the same signature, so
//! dispatch is one map lookup. Handlers borrow the session's [`VirtualFs`]
//! for the duration of the call; the interpreter never owns it.

mod builtins;
mod result;

pub use result::{CommandOutput, Reply, SideEffect};

use std::collections::HashMap;
use std::fmt;

use crate::error::CommandError;
use crate::filesystem::VirtualFs;

/// A command implementation. Receives the trimmed argument, `None` when the
/// line holds the command name alone.
pub type Handler = Box<dyn Fn(&mut VirtualFs, Option<&str>) -> Reply + Send + Sync>;

/// Split a line into `(command, argument)` at the first whitespace run.
///
/// Returns `None` for a blank line.
pub fn split_line(line: &str) -> Option<(&str, Option<&str>)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => {
            let rest = rest.trim();
            Some((name, (!rest.is_empty()).then_some(rest)))
        }
        None => Some((line, None)),
    }
}

/// Maps command names (case-sensitive) to handlers.
#[derive(Default)]
pub struct CommandInterpreter {
    commands: HashMap<String, Handler>,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command. Registering an existing name replaces its handler.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut VirtualFs, Option<&str>) -> Reply + Send + Sync + 'static,
    {
        let name = name.into();
        if self.commands.insert(name.clone(), Box::new(handler)).is_some() {
            log::debug!("command '{}' re-registered", name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run one input line.
    ///
    /// A blank line produces empty output. An unknown command is reported as
    /// [`CommandError::NotFound`] without touching the filesystem.
    pub fn execute(&self, fs: &mut VirtualFs, line: &str) -> Reply {
        let Some((name, arg)) = split_line(line) else {
            return Ok(CommandOutput::empty());
        };

        match self.commands.get(name) {
            Some(handler) => handler(fs, arg),
            None => Err(CommandError::NotFound(name.to_string())),
        }
    }
}

impl fmt::Debug for CommandInterpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandInterpreter")
            .field("commands", &self.names())
            .finish()
    }
}
