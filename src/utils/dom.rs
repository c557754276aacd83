//! DOM and Web API utility functions.
//!
//! Thin wrappers over `web_sys` that swallow browser errors: every caller
//! treats these as fire-and-forget.

use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::LINK_TARGET;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}

/// Open `target` (a URL or `mailto:` link) in a new browsing context.
///
/// Popup blockers may refuse; that is logged and otherwise ignored.
pub fn open_url(target: &str) {
    let Some(window) = window() else {
        log::warn!("no window to open {}", target);
        return;
    };

    match window.open_with_url_and_target(target, LINK_TARGET) {
        Ok(Some(_)) => log::debug!("opened {}", target),
        Ok(None) => log::warn!("browser blocked opening {}", target),
        Err(e) => log::warn!("failed to open {}: {:?}", target, e),
    }
}
