//! Root application module.
//!
//! Contains the main App component, AppContext definition, TerminalState,
//! and application-level setup logic following Leptos conventions.

use std::collections::VecDeque;

use dhelix_core::{CommandInterpreter, Seed, Session, VirtualFs};
use leptos::prelude::*;

use crate::components::terminal::Shell;
use crate::config::{APP_NAME, MAX_COMMAND_HISTORY, MAX_TERMINAL_HISTORY};
use crate::models::OutputLine;

// ============================================================================
// TerminalState
// ============================================================================

/// Display state of the terminal surface.
///
/// Holds what the user sees (output history) and what they typed (command
/// history). Navigation state lives in the [`Session`], not here.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Terminal output history (bounded by `MAX_TERMINAL_HISTORY`).
    pub history: RwSignal<VecDeque<OutputLine>>,
    /// Command history for up/down navigation.
    pub command_history: RwSignal<Vec<String>>,
    /// Current position in command history (for navigation).
    pub history_index: RwSignal<Option<usize>>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            history: RwSignal::new(VecDeque::with_capacity(MAX_TERMINAL_HISTORY)),
            command_history: RwSignal::new(Vec::new()),
            history_index: RwSignal::new(None),
        }
    }

    /// Appends a single output line, dropping the oldest past capacity.
    pub fn push_output(&self, line: OutputLine) {
        self.push_lines(vec![line]);
    }

    /// Appends multiple output lines, dropping the oldest past capacity.
    pub fn push_lines(&self, lines: Vec<OutputLine>) {
        if lines.is_empty() {
            return;
        }
        self.history.update(|h| {
            h.extend(lines);
            let excess = h.len().saturating_sub(MAX_TERMINAL_HISTORY);
            h.drain(..excess);
        });
    }

    /// Clears all terminal output history.
    pub fn clear_history(&self) {
        self.history.update(|h| h.clear());
    }

    pub fn add_to_command_history(&self, cmd: &str) {
        if !cmd.trim().is_empty() {
            self.command_history.update(|h| {
                if h.last().map(|s| s.as_str()) != Some(cmd) {
                    h.push(cmd.to_string());
                    if h.len() > MAX_COMMAND_HISTORY {
                        h.remove(0);
                    }
                }
            });
        }
        self.history_index.set(None);
    }

    /// Step through command history. Negative `direction` goes back in time.
    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        let history = self.command_history.get();
        if history.is_empty() {
            return None;
        }

        let current_index = self.history_index.get();
        let new_index = match current_index {
            None if direction < 0 => Some(history.len() - 1),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < history.len() - 1 => Some(i + 1),
            Some(_) if direction > 0 => None,
            _ => current_index,
        };

        self.history_index.set(new_index);
        new_index.map(|i| history[i].clone())
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Terminal display state.
    pub terminal: TerminalState,

    /// The interpreter session. Its current directory drives the prompt.
    pub session: RwSignal<Session>,

    /// Set when the embedded seed could not be loaded; shown after the banner.
    pub boot_error: StoredValue<Option<String>>,
}

impl AppContext {
    /// Creates the context with a session over the embedded seed.
    ///
    /// A broken seed still yields a working terminal: the built-in commands
    /// run over an empty filesystem and the error is reported at boot.
    pub fn new() -> Self {
        let (session, boot_error) = match Session::builtin() {
            Ok(session) => (session, None),
            Err(e) => {
                log::error!("failed to load seed: {}", e);
                let seed = Seed {
                    creator: APP_NAME.to_string(),
                    contacts: Vec::new(),
                    entries: Vec::new(),
                };
                let session =
                    Session::new(VirtualFs::empty(), CommandInterpreter::with_builtins(&seed));
                (session, Some(format!("Failed to load filesystem: {}", e)))
            }
        };

        Self {
            terminal: TerminalState::new(),
            session: RwSignal::new(session),
            boot_error: StoredValue::new(boot_error),
        }
    }

    /// Prompt for the current directory, e.g. `$ /documents > `.
    ///
    /// Reads the session signal, so views using it re-render after `cd`.
    pub fn get_prompt(&self) -> String {
        self.session.with(|s| s.prompt())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
