//! Command interpreter and mock filesystem behind the Double Helix terminal.
//!
//! This crate provides:
//! - [`VirtualFs`] and [`NavigatorState`] for the read-only mock filesystem
//! - [`CommandInterpreter`] for dispatching command lines to handlers
//! - [`Session`], the per-user root that owns both
//! - [`autocomplete`] and [`get_hint`] for tab completion
//!
//! Nothing here touches the DOM; surfaces render [`Reply`] values and carry
//! out [`SideEffect`]s themselves.

mod autocomplete;
mod commands;
pub mod config;
mod contact;
pub mod error;
mod filesystem;
pub mod models;
mod session;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use commands::{CommandInterpreter, CommandOutput, Handler, Reply, SideEffect, split_line};
pub use contact::{EMAIL_KEY, contact_target};
pub use error::{CommandError, FsError, SeedError, TargetError};
pub use filesystem::{Listing, NavigatorState, ROOT, VirtualFs, normalize};
pub use models::{Contact, EntryKind, FsEntry, Seed};
pub use session::Session;
