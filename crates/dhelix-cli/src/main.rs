//! Line-oriented host for the Double Helix terminal.
//!
//! Reads commands from stdin and prints replies, the way the web surface
//! renders them. Links are printed instead of opened.

mod error;
mod repl;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dhelix_core::{Seed, Session};
use tracing::Level;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "dhelix-cli", about = "Mothership NPC terminal, in your terminal")]
struct Args {
    /// Seed file (TOML) with contacts and filesystem entries
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn load_seed(path: Option<&PathBuf>) -> Result<Seed, CliError> {
    let Some(path) = path else {
        return Ok(Seed::builtin()?);
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::ReadSeed {
        path: path.clone(),
        source,
    })?;
    Seed::parse(&text).map_err(|source| CliError::InvalidSeed {
        path: path.clone(),
        source,
    })
}

fn start_session(args: &Args) -> Result<Session, CliError> {
    let seed = load_seed(args.seed.as_ref())?;
    let session = match &args.seed {
        Some(path) => Session::from_seed(&seed).map_err(|source| CliError::InvalidSeed {
            path: path.clone(),
            source,
        })?,
        None => Session::from_seed(&seed)?,
    };
    tracing::debug!(creator = %seed.creator, "seed loaded");
    Ok(session)
}

fn run(args: &Args) -> Result<(), CliError> {
    let session = start_session(args)?;
    let stdin = io::stdin();
    repl::run(session, !args.no_banner, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Records from the `log` facade in dhelix-core are bridged into tracing.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dhelix-cli: {e}");
            ExitCode::FAILURE
        }
    }
}
