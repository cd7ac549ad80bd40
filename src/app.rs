//! Root application module.
//!
//! Builds the route table once at startup and hands it to the router, all
//! inside an error boundary so an invalid table is reported on screen.

use leptos::error::Errors;
use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::components::router::app_route_table;
use crate::config::APP_NAME;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// This component:
/// - Validates the static route table
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router, which mounts the matched page
#[component]
pub fn App() -> impl IntoView {
    let table = app_route_table();
    match &table {
        Ok(table) => {
            let paths: Vec<&str> = table.entries().map(|(path, _)| path).collect();
            log!("routes: {}", paths.join(", "));
        }
        Err(err) => error!("invalid route table: {}", err),
    }

    view! {
        <ErrorBoundary fallback=|errors| view! { <StartupError errors=errors /> }>
            {table.map(|table| view! { <AppRouter table=table /> })}
        </ErrorBoundary>
    }
}

/// Shown when the shell cannot start, e.g. the route table failed validation.
#[component]
fn StartupError(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let reload = move |_: leptos::ev::MouseEvent| {
        if let Some(window) = dom::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class=css::startupError role="alert">
            <h1>{format!("{} failed to start", APP_NAME)}</h1>
            <ul class=css::details>
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
            <button class=css::reload on:click=reload>
                "Reload"
            </button>
        </div>
    }
}
