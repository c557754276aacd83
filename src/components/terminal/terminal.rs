//! Terminal view component.
//!
//! The terminal interface with output history and command input.

use dhelix_core::{AutocompleteResult, CommandOutput, SideEffect};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::models::OutputLine;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Derived signals
    let prompt = Signal::derive(move || ctx.get_prompt());

    // Callbacks
    let on_submit = create_submit_callback(ctx);
    let on_clear = Callback::new(move |_: ()| ctx.terminal.clear_history());
    let on_history_nav = create_history_nav_callback(ctx);
    let on_autocomplete = create_autocomplete_callback(ctx);
    let on_get_hint = create_hint_callback(ctx);

    let handle_click = move |_| dom::focus_terminal_input();
    let history_signal = ctx.terminal.history;

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || history_signal.get().into_iter()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <div class=css::inputArea>
                <Input
                    prompt=prompt
                    on_submit=on_submit
                    on_clear=on_clear
                    on_history_nav=on_history_nav
                    on_autocomplete=on_autocomplete
                    on_get_hint=on_get_hint
                />
            </div>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        let prompt = ctx.get_prompt();

        ctx.terminal
            .push_output(OutputLine::command(prompt, &input));
        ctx.terminal.add_to_command_history(&input);

        let Some(reply) = ctx.session.try_update(|session| session.submit(&input)) else {
            log::error!("session disposed before '{}' could run", input);
            return;
        };

        if let Ok(CommandOutput::Effect { effect, .. }) = &reply {
            match effect {
                SideEffect::Clear => ctx.terminal.clear_history(),
                SideEffect::Open { target } => dom::open_url(target),
            }
        }

        ctx.terminal.push_lines(OutputLine::from_reply(&reply));
    })
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<i32, Option<String>> {
    Callback::new(move |direction: i32| ctx.terminal.navigate_history(direction))
}

fn create_autocomplete_callback(ctx: AppContext) -> Callback<String, AutocompleteResult> {
    Callback::new(move |input: String| ctx.session.with(|session| session.autocomplete(&input)))
}

fn create_hint_callback(ctx: AppContext) -> Callback<String, Option<String>> {
    Callback::new(move |input: String| ctx.session.with(|session| session.hint(&input)))
}
