//! Application router component.
//!
//! Handles URL-based routing on top of the History API.
//!
//! # Architecture
//!
//! - **`location.pathname` is the source of truth**: the current page is
//!   resolved from the path against a validated [`RouteTable`]
//! - **Root layout stays mounted** while navigating between matched pages
//! - **ErrorPage replaces the layout** when nothing matches
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::logging::warn;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::layout::Root;
use crate::components::pages::ErrorPage;
use crate::config;
use crate::models::{Page, Resolution, RouteTable, RouteTableError, normalize_location};
use crate::utils::dom;

// ============================================================================
// Router Context
// ============================================================================

/// Navigation handle shared with every component below the router.
///
/// Holds the current location; `Copy` because it only wraps a signal.
#[derive(Clone, Copy)]
pub struct RouterContext {
    location: RwSignal<String>,
}

impl RouterContext {
    /// Creates a router positioned at `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            location: RwSignal::new(initial.into()),
        }
    }

    /// Current location (tracked when read inside a reactive scope).
    pub fn location(&self) -> String {
        self.location.get()
    }

    /// Navigates to `path`, adding a history entry.
    ///
    /// Navigating to the location already shown does not add an entry.
    pub fn navigate(&self, path: &str) {
        if self.is_active(path) {
            return;
        }
        dom::push_path(path);
        self.location.set(path.to_string());
    }

    /// Whether `path` resolves to the same location as the current one.
    pub fn is_active(&self, path: &str) -> bool {
        self.location
            .with(|current| normalize_location(current) == normalize_location(path))
    }

    /// Re-reads the location after the browser changed it (back/forward).
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn sync_from_browser(&self) {
        self.location.set(dom::current_path());
    }
}

/// Builds and validates the application's route table.
pub fn app_route_table() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(&config::route_entries())
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Resolves the current location against `table`:
/// - matched path → [`Root`] layout with the page mounted inside
/// - anything else → [`ErrorPage`]
#[component]
pub fn AppRouter(table: RouteTable) -> impl IntoView {
    let router = RouterContext::new(dom::current_path());
    provide_context(router);

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            router.sync_from_browser();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let page = Memo::new(move |_| match table.resolve(&router.location()) {
        Resolution::Matched(page) => Some(page),
        Resolution::NotFound => {
            warn!("no route matches {}", router.location.get_untracked());
            None
        }
    });

    // Keep the document title in sync with the mounted page
    Effect::new(move || {
        let title = match page.get().and_then(Page::title) {
            Some(title) => format!("{} | {}", title, config::APP_NAME),
            None => config::APP_NAME.to_string(),
        };
        dom::set_document_title(&title);
    });

    view! {
        <Show when=move || page.get().is_some() fallback=|| view! { <ErrorPage /> }>
            <Root page=page />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths;

    #[test]
    fn test_navigate_updates_resolution() {
        let owner = Owner::new();
        owner.with(|| {
            let table = app_route_table().unwrap();
            let router = RouterContext::new("/");
            assert_eq!(
                table.resolve(&router.location()),
                Resolution::Matched(Page::Home)
            );

            router.navigate(paths::DELETE_ACCOUNT);
            assert_eq!(router.location(), paths::DELETE_ACCOUNT);
            assert_eq!(
                table.resolve(&router.location()),
                Resolution::Matched(Page::DeleteAccount)
            );

            router.navigate("/missing");
            assert_eq!(table.resolve(&router.location()), Resolution::NotFound);
        });
    }

    #[test]
    fn test_navigate_to_current_location_is_noop() {
        let owner = Owner::new();
        owner.with(|| {
            let router = RouterContext::new("/saintspace/universe/account/");
            router.navigate(paths::ACCOUNT);
            assert_eq!(router.location(), "/saintspace/universe/account/");
            assert!(router.is_active(paths::ACCOUNT));
            assert!(!router.is_active(paths::HOME));
        });
    }
}
