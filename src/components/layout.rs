//! Root layout shared by every matched route.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::pages::PageView;
use crate::models::Page;

stylance::import_crate_style!(css, "src/components/layout.module.css");

/// Navbar plus the page matched by the router.
///
/// Stays mounted while navigating between pages; only the `<main>` content
/// is swapped.
#[component]
pub fn Root(#[prop(into)] page: Signal<Option<Page>>) -> impl IntoView {
    let title = Signal::derive(move || page.get().and_then(Page::title).map(String::from));

    view! {
        <div class=css::root>
            <Navbar title=title />
            <main class=css::content>
                {move || page.get().map(|page| view! { <PageView page=page /> })}
            </main>
        </div>
    }
}
