//! Boot sequence: banner, tagline and any seed load failure.

use dhelix_core::config::{BANNER, TAGLINE};
use leptos::prelude::GetValue;

use crate::app::AppContext;
use crate::config::APP_NAME;
use crate::models::OutputLine;

/// Print the welcome screen.
pub fn run(ctx: AppContext) {
    log::info!("{} booting", APP_NAME);

    ctx.terminal.push_lines(vec![
        OutputLine::ascii(BANNER),
        OutputLine::empty(),
        OutputLine::info(TAGLINE),
        OutputLine::empty(),
    ]);

    if let Some(error) = ctx.boot_error.get_value() {
        ctx.terminal.push_lines(vec![OutputLine::error(error), OutputLine::empty()]);
    }
}
