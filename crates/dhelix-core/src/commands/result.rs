//! Command execution result types.

use crate::error::CommandError;

/// Outcome of one command line: output for the surface, or a reported error.
pub type Reply = Result<CommandOutput, CommandError>;

/// An action the hosting surface carries out on behalf of a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Wipe the terminal display.
    Clear,
    /// Open an external resource (a URL or a `mailto:` link).
    Open { target: String },
}

/// Output of a successful command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutput {
    /// A single line.
    Text(String),
    /// Ordered display lines.
    Lines(Vec<String>),
    /// A side effect, with an optional confirmation line.
    Effect {
        effect: SideEffect,
        message: Option<String>,
    },
}

impl CommandOutput {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Split a multi-line block into display lines.
    pub fn block(s: &str) -> Self {
        Self::Lines(s.lines().map(str::to_string).collect())
    }

    /// Output that displays nothing.
    pub fn empty() -> Self {
        Self::Lines(Vec::new())
    }

    /// The text lines this output displays, ignoring any side effect.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Text(s) => vec![s.clone()],
            Self::Lines(lines) => lines.clone(),
            Self::Effect { message, .. } => message.iter().cloned().collect(),
        }
    }

    pub fn effect(&self) -> Option<&SideEffect> {
        match self {
            Self::Effect { effect, .. } => Some(effect),
            _ => None,
        }
    }
}
