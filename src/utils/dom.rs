//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Outside a browser every accessor degrades to a no-op or a default value.

use leptos::logging::warn;
use web_sys::Window;

/// Get the browser window object.
///
/// Always `None` on non-wasm targets, where browser bindings are unavailable.
#[inline]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current `location.pathname`, or `/` when unavailable.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Push `path` onto the session history without reloading.
///
/// `pushState` never fires `popstate`, so callers update their own location
/// state afterwards.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
        && history
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            .is_err()
    {
        warn!("failed to push history entry for {}", path);
    }
}

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
