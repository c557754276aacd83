//! Main shell component.
//!
//! Screen container around the terminal: runs the boot sequence once,
//! keeps the output scrolled to the bottom and draws the CRT effects.

use leptos::prelude::*;
use std::collections::VecDeque;

use super::boot;
use super::terminal::Terminal;
use crate::app::AppContext;
use crate::models::OutputLine;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Auto-scroll output to bottom when history changes.
fn setup_autoscroll_effect(
    history: RwSignal<VecDeque<OutputLine>>,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        history.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Boot sequence runs once
    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            boot::run(ctx);
        }
    });

    setup_autoscroll_effect(ctx.terminal.history, output_ref);

    view! {
        <div class=css::screen>
            <div class=css::crtOverlay></div>
            <div class=css::scanline></div>

            <div class=css::main>
                <Terminal output_ref=output_ref />
            </div>
        </div>
    }
}
