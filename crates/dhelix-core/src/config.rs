//! Built-in text assets and seed data.
//!
//! Assets are embedded at compile time using `include_str!` so every surface
//! (web and CLI) shows the same banner, help menu and filesystem.

/// ASCII banner shown when a session starts.
pub const BANNER: &str = include_str!("../assets/text/banner.txt");

/// Line printed under the banner.
pub const TAGLINE: &str =
    "NPC generator and lookup tool for the TTRPG, Mothership.  Type 'help' to view menu.";

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Default seed: contacts and the mock filesystem, in TOML.
pub const SEED_TOML: &str = include_str!("../assets/seed.toml");
