//! Data models for the web surface.
//!
//! - [`OutputLine`], [`OutputLineData`] - Terminal output rendering

mod terminal;

pub use terminal::{OutputLine, OutputLineData};
