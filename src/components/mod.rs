//! UI components built with Leptos.
//!
//! - [`terminal`] - Terminal emulator interface and its [`Shell`](terminal::Shell) container

pub mod terminal;
