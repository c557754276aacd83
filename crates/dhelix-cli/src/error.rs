//! Startup and I/O failures of the command-line host.

use std::io;
use std::path::PathBuf;

use dhelix_core::SeedError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    ReadSeed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    InvalidSeed {
        path: PathBuf,
        #[source]
        source: SeedError,
    },

    #[error("built-in seed: {0}")]
    BuiltinSeed(#[from] SeedError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
