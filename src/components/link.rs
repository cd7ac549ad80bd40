//! Client-side navigation link.
//!
//! Renders a real `<a href>` so middle-click, copy-link and "open in new tab"
//! keep working; only a plain primary click is turned into router navigation.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::router::RouterContext;

/// Mouse button and modifier keys of a click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickModifiers {
    pub fn from_event(ev: &MouseEvent) -> Self {
        Self {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        }
    }

    /// Whether the router should handle this click instead of the browser.
    pub fn is_plain_primary(&self) -> bool {
        self.button == 0 && !(self.ctrl || self.meta || self.shift || self.alt)
    }
}

/// Handles a click on a link to `to`.
///
/// `on_click` always runs. Navigation happens only for a plain primary click
/// that no earlier handler has claimed; the return value tells the caller to
/// suppress the browser's own navigation.
pub fn activate(
    router: RouterContext,
    to: &str,
    click: ClickModifiers,
    default_prevented: bool,
    on_click: Option<Callback<()>>,
) -> bool {
    if let Some(on_click) = on_click {
        on_click.run(());
    }
    if default_prevented || !click.is_plain_primary() {
        return false;
    }
    router.navigate(to);
    true
}

/// Anchor that navigates through [`RouterContext`].
///
/// `on_click` runs on every activation, including modified clicks the
/// browser handles itself.
#[component]
pub fn Link(
    /// Absolute target path.
    #[prop(into)]
    to: String,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    let href = to.clone();
    let target = to.clone();
    let on_activate = move |ev: MouseEvent| {
        let click = ClickModifiers::from_event(&ev);
        if activate(router, &target, click, ev.default_prevented(), on_click) {
            ev.prevent_default();
        }
    };

    let aria_current = move || router.is_active(&to).then_some("page");

    view! {
        <a href=href aria-label=aria_label aria-current=aria_current on:click=on_activate>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_primary_click() {
        assert!(ClickModifiers::default().is_plain_primary());
    }

    #[test]
    fn test_modified_clicks_fall_through() {
        let plain = ClickModifiers::default();
        let variants = [
            ClickModifiers { button: 1, ..plain },
            ClickModifiers { button: 2, ..plain },
            ClickModifiers { ctrl: true, ..plain },
            ClickModifiers { meta: true, ..plain },
            ClickModifiers { shift: true, ..plain },
            ClickModifiers { alt: true, ..plain },
        ];
        for click in variants {
            assert!(!click.is_plain_primary(), "{click:?}");
        }
    }

    #[test]
    fn test_plain_click_runs_handler_and_navigates() {
        let owner = Owner::new();
        owner.with(|| {
            let router = RouterContext::new("/");
            let clicks = RwSignal::new(0);
            let on_click = Callback::new(move |_: ()| clicks.update(|n| *n += 1));

            let handled = activate(
                router,
                "/saintspace/universe/auth/signout",
                ClickModifiers::default(),
                false,
                Some(on_click),
            );

            assert!(handled);
            assert_eq!(clicks.get_untracked(), 1);
            assert_eq!(router.location(), "/saintspace/universe/auth/signout");
        });
    }

    #[test]
    fn test_modified_click_runs_handler_without_navigating() {
        let owner = Owner::new();
        owner.with(|| {
            let router = RouterContext::new("/");
            let clicks = RwSignal::new(0);
            let on_click = Callback::new(move |_: ()| clicks.update(|n| *n += 1));
            let ctrl = ClickModifiers {
                ctrl: true,
                ..Default::default()
            };

            let handled = activate(
                router,
                "/saintspace/universe/account",
                ctrl,
                false,
                Some(on_click),
            );

            assert!(!handled);
            assert_eq!(clicks.get_untracked(), 1);
            assert_eq!(router.location(), "/");
        });
    }

    #[test]
    fn test_claimed_click_is_left_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let router = RouterContext::new("/");

            let handled = activate(
                router,
                "/saintspace/universe/account",
                ClickModifiers::default(),
                true,
                None,
            );

            assert!(!handled);
            assert_eq!(router.location(), "/");
        });
    }
}
