//! Web surface configuration.
//!
//! Text assets (banner, help, seed) live in `dhelix_core::config`; this
//! module holds what only the browser terminal needs.

/// Application name used in the document title and logs.
pub const APP_NAME: &str = "Double Helix";

/// Maximum number of terminal output lines to keep in history.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Window name passed to `window.open` for contact links.
pub const LINK_TARGET: &str = "_blank";
