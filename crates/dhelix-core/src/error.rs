//! Error types for the terminal core.
//!
//! Every variant here except [`SeedError`] is a *reported* condition: the
//! surface renders it as an error line and keeps accepting input.
//!
//! - [`FsError`] - navigation and file lookups in the mock filesystem
//! - [`CommandError`] - dispatch failures and command usage errors
//! - [`TargetError`] - contact values that cannot be opened as links
//! - [`SeedError`] - invalid seed data, raised once at session start

/// Virtual filesystem errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsError {
    /// No entry with the requested name exists in the searched directory.
    #[error("Directory '{name}' not found in '{dir}'")]
    DirectoryNotFound { name: String, dir: String },

    /// The requested name exists but is a file.
    #[error("cd: '{name}' in '{dir}' is not a directory")]
    NotADirectory { name: String, dir: String },

    /// No file with the requested name exists in the searched directory.
    #[error("File '{name}' not found in '{dir}'")]
    FileNotFound { name: String, dir: String },
}

/// Errors produced while dispatching a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{0}: command not found. Type 'help' for available commands.")]
    NotFound(String),

    /// A command that requires an argument was called without one.
    #[error("{0}: missing operand")]
    MissingOperand(&'static str),

    /// The command is registered but has no implementation yet.
    #[error("{0}: not available yet")]
    NotImplemented(String),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("contact: {0}")]
    Target(#[from] TargetError),
}

/// A contact value that was refused as an external link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("'{0}' has an empty value")]
    Empty(String),

    /// Only `http://` and `https://` links are opened.
    #[error("'{0}' must start with http:// or https://")]
    InvalidProtocol(String),

    #[error("'{0}' has no host")]
    NoHost(String),
}

/// Invalid seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to parse seed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two entries share the same `(location, filename)` pair.
    #[error("duplicate entry '{filename}' in '{location}'")]
    DuplicateEntry { location: String, filename: String },

    /// A file without content, or a directory with content.
    #[error("entry '{filename}' in '{location}': content is only allowed on files")]
    ContentMismatch { location: String, filename: String },

    #[error("entry in '{0}' has an empty filename")]
    EmptyFilename(String),

    /// The location is not an absolute directory path such as `/` or `/docs`.
    #[error("entry '{filename}': location '{location}' is not an absolute directory path")]
    InvalidLocation { location: String, filename: String },
}
