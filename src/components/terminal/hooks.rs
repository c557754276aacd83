//! Reactive state shared by the input component's key handlers.

use leptos::prelude::*;

/// Tab cycling through several completion candidates.
///
/// `base` is the completed line up to the word being cycled, e.g. `cd do`;
/// `matches` holds bare command or entry names.
#[derive(Clone, Copy)]
pub struct TabCycleState {
    pub matches: RwSignal<Vec<String>>,
    pub index: RwSignal<usize>,
    pub base: RwSignal<String>,
}

impl TabCycleState {
    pub fn new() -> Self {
        Self {
            matches: RwSignal::new(Vec::new()),
            index: RwSignal::new(0),
            base: RwSignal::new(String::new()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.matches.with(|m| !m.is_empty())
    }

    pub fn clear(&self) {
        self.matches.set(Vec::new());
        self.index.set(0);
        self.base.set(String::new());
    }

    /// Move to the next match, wrapping around.
    pub fn advance(&self) {
        let len = self.matches.with(Vec::len);
        if len > 0 {
            self.index.update(|i| *i = (*i + 1) % len);
        }
    }

    pub fn start(&self, base: String, matches: Vec<String>) {
        self.base.set(base);
        self.matches.set(matches);
        self.index.set(0);
    }

    pub fn current_match(&self) -> Option<String> {
        let idx = self.index.get();
        self.matches.with(|matches| matches.get(idx).cloned())
    }

    /// Input line with the selected match in place of the cycled word.
    pub fn build_completion(&self) -> Option<String> {
        let selected = self.current_match()?;
        let completed = self.base.with(|base| match base.split_once(' ') {
            Some((cmd, _)) => format!("{} {}", cmd, selected),
            None => selected,
        });
        Some(completed)
    }
}

impl Default for TabCycleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Ghost text shown after the typed input.
#[derive(Clone, Copy)]
pub struct HintState {
    pub hint: RwSignal<Option<String>>,
}

impl HintState {
    pub fn new() -> Self {
        Self {
            hint: RwSignal::new(None),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.hint.get()
    }

    pub fn set(&self, value: Option<String>) {
        self.hint.set(value);
    }

    pub fn clear(&self) {
        self.hint.set(None);
    }
}

impl Default for HintState {
    fn default() -> Self {
        Self::new()
    }
}
