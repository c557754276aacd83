//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

use dhelix_core::{CommandOutput, Reply};

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echo of a submitted line with the prompt it was typed at
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Reported failure (red)
    Error(String),
    /// Notice from the surface itself (yellow)
    Info(String),
    /// ASCII art (with glow effect)
    Ascii(String),
    /// Empty line
    Empty,
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    /// Text line; an empty string becomes [`OutputLineData::Empty`].
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Self::empty()
        } else {
            Self::new(OutputLineData::Text(s))
        }
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn ascii(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Ascii(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }

    /// Display lines for a command reply.
    ///
    /// Side effects are not carried out here; only their confirmation
    /// message is rendered.
    pub fn from_reply(reply: &Reply) -> Vec<Self> {
        match reply {
            Ok(CommandOutput::Effect { message, .. }) => {
                message.iter().map(Self::info).collect()
            }
            Ok(output) => output.lines().into_iter().map(Self::text).collect(),
            Err(e) => vec![Self::error(e.to_string())],
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}
