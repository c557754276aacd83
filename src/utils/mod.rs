//! Browser utilities.
//!
//! - [`dom`] - window access, focus, opening links
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
pub mod logger;
