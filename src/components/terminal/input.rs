//! Terminal input component with autocompletion and history navigation.

use dhelix_core::AutocompleteResult;
use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::{HintState, TabCycleState};

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Prompt plus input field.
///
/// Keys: Enter submits, ArrowUp/ArrowDown walk the command history, Tab
/// completes (repeated Tab cycles through matches), ArrowRight at the end of
/// the line accepts the ghost hint, Ctrl+L clears the screen and Ctrl+C
/// discards the current line.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    on_submit: Callback<String>,
    on_clear: Callback<()>,
    on_history_nav: Callback<i32, Option<String>>,
    on_autocomplete: Callback<String, AutocompleteResult>,
    on_get_hint: Callback<String, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    let tab_state = TabCycleState::new();
    let hint_state = HintState::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let reset_state = move || {
        tab_state.clear();
        hint_state.clear();
    };

    let handle_tab = move |value: String| -> Option<String> {
        if value.trim().is_empty() {
            return None;
        }

        if tab_state.is_active() {
            tab_state.advance();
            return tab_state.build_completion();
        }

        match on_autocomplete.run(value.clone()) {
            AutocompleteResult::Single(completed) => {
                hint_state.clear();
                Some(completed)
            }
            AutocompleteResult::Multiple(common, matches) => {
                hint_state.clear();
                tab_state.start(common.clone(), matches);
                if common.len() > value.len() {
                    Some(common)
                } else {
                    tab_state.build_completion()
                }
            }
            AutocompleteResult::None => None,
        }
    };

    let handle_arrow_right = move |input_value: &str| -> Option<String> {
        let input = input_ref.get()?;
        let pos = input.selection_start().ok().flatten().unwrap_or(0) as usize;
        if pos != input_value.len() {
            return None;
        }
        let hint = hint_state.get()?;
        hint_state.clear();
        Some(format!("{}{}", input_value, hint))
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            if let Some(completed) = handle_tab(input_value.get()) {
                set_input_value.set(completed);
                move_cursor_to_end();
            }
        }
        "Enter" => {
            reset_state();
            on_submit.run(input_value.get());
            set_input_value.set(String::new());
        }
        "ArrowUp" => {
            ev.prevent_default();
            reset_state();
            if let Some(cmd) = on_history_nav.run(-1) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            reset_state();
            set_input_value.set(on_history_nav.run(1).unwrap_or_default());
        }
        "ArrowRight" => {
            if let Some(completed) = handle_arrow_right(&input_value.get()) {
                ev.prevent_default();
                set_input_value.set(completed);
                move_cursor_to_end();
            }
        }
        "c" if ev.ctrl_key() => {
            reset_state();
            set_input_value.set(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            reset_state();
            on_clear.run(());
        }
        "Escape" => reset_state(),
        _ => tab_state.clear(),
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let value = target.unchecked_into::<web_sys::HtmlInputElement>().value();
        set_input_value.set(value.clone());
        tab_state.clear();

        if value.is_empty() {
            hint_state.clear();
        } else {
            hint_state.set(on_get_hint.run(value));
        }
    };

    let suggestions_view = move || {
        let matches = tab_state.matches.get();
        if matches.is_empty() {
            return None;
        }
        let idx = tab_state.index.get();
        Some(view! {
            <div class=css::suggestions>
                {matches.into_iter().enumerate().map(|(i, s)| {
                    let class_name = if i == idx {
                        format!("{} {}", css::suggestion, css::suggestionActive)
                    } else {
                        css::suggestion.to_string()
                    };
                    view! { <span class=class_name>{s}</span> }
                }).collect_view()}
            </div>
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <div class=css::field>
                    // Ghost text overlay (input value + hint)
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{move || input_value.get()}</span>
                        <span class=css::ghostHint>
                            {move || hint_state.hint.get().unwrap_or_default()}
                        </span>
                    </div>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=input_value
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>

            {suggestions_view}
        </div>
    }
}
