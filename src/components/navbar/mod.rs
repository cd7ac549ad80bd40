//! Navigation bar with a slide-out drawer.
//!
//! The bar shows the logo, an optional title and a menu button. The button
//! opens a drawer listing [`NAV_LINKS`]; following a link closes the drawer
//! and navigates. The drawer also closes on overlay click, its close button,
//! or the Escape key.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_event_listener, use_window};

use crate::components::icons as ic;
use crate::components::link::Link;
use crate::config::{DRAWER_POSITION, DrawerPosition, LOGO_ALT, LOGO_SRC, NAV_LINKS};
use crate::models::{Disclosure, DisclosureState, NavLink};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Top navigation bar.
///
/// `title` is rendered verbatim; when absent the title region is empty. The
/// drawer starts closed on every mount.
#[component]
pub fn Navbar(#[prop(optional, into)] title: MaybeProp<String>) -> impl IntoView {
    let drawer = Disclosure::new();

    let _ = use_event_listener(
        use_window(),
        leptos::ev::keydown,
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" {
                drawer.close();
            }
        },
    );

    view! {
        <nav class=css::navbar aria-label="Main navigation">
            <div class=css::logo>
                <img class=css::logoImage src=LOGO_SRC alt=LOGO_ALT />
            </div>
            <div class=css::navbarTitle>{move || title_text(title.get())}</div>
            <div class=css::navigation>
                <button
                    class=css::menuButton
                    aria-label="Open navigation"
                    aria-expanded=move || drawer.is_open().to_string()
                    on:click=move |_| drawer.open()
                >
                    <Icon icon=ic::MENU />
                </button>
            </div>
        </nav>
        <Drawer drawer=drawer />
    }
}

/// One rendered drawer link.
#[derive(Clone, Copy)]
struct DrawerItem {
    link: NavLink,
    /// Whether a divider follows this link.
    divider: bool,
    /// Runs on activation; closes the drawer.
    on_click: Callback<()>,
}

/// Drawer links in display order, each wired to close `drawer`.
fn drawer_items(drawer: Disclosure) -> Vec<DrawerItem> {
    let close = Callback::new(move |_: ()| drawer.close());
    NAV_LINKS
        .iter()
        .enumerate()
        .map(|(i, link)| DrawerItem {
            link: *link,
            divider: i + 1 < NAV_LINKS.len(),
            on_click: close,
        })
        .collect()
}

/// Slide-out panel holding the navigation links.
///
/// While closed the panel is `inert`, so its links leave the tab order.
#[component]
fn Drawer(drawer: Disclosure) -> impl IntoView {
    let panel_class = move || drawer_class(drawer.state());
    let hidden = move || panel_hidden(drawer.state());

    view! {
        <Show when=move || drawer.is_open()>
            <div class=css::overlay on:click=move |_| drawer.close()></div>
        </Show>
        <aside
            class=panel_class
            role="dialog"
            aria-label="Navigation"
            aria-hidden=move || hidden().to_string()
            inert=hidden
        >
            <div class=css::drawerHeader>
                <button
                    class=css::closeButton
                    aria-label="Close navigation"
                    on:click=move |_| drawer.close()
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
            <ul class=css::navigationLinks>
                {drawer_items(drawer)
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class=css::navigationLink>
                                <Link
                                    to=item.link.to
                                    aria_label=item.link.aria_label
                                    on_click=item.on_click
                                >
                                    {item.link.label}
                                </Link>
                                {item.divider.then(|| view! { <hr /> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

fn title_text(title: Option<String>) -> String {
    title.unwrap_or_default()
}

fn panel_hidden(state: DisclosureState) -> bool {
    !state.is_open()
}

fn drawer_class(state: DisclosureState) -> String {
    let side = match DRAWER_POSITION {
        DrawerPosition::Left => css::drawerLeft,
        DrawerPosition::Right => css::drawerRight,
    };
    match state {
        DisclosureState::Open => format!("{} {} {}", css::drawer, side, css::drawerOpen),
        DisclosureState::Closed => format!("{} {}", css::drawer, side),
    }
}
