//! Page components mounted by the router.
//!
//! Page bodies are placeholders; the account, sign-in and subscription flows
//! they front are served elsewhere.

use leptos::prelude::*;

use crate::components::link::Link;
use crate::components::router::RouterContext;
use crate::config::paths;
use crate::models::Page;

stylance::import_crate_style!(css, "src/components/pages.module.css");

/// Renders the component registered for `page`.
#[component]
pub fn PageView(page: Page) -> impl IntoView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Account => view! { <AccountPage /> }.into_any(),
        Page::DeleteAccount => view! { <DeleteAccountPage /> }.into_any(),
        Page::SignOut => view! { <SignOutPage /> }.into_any(),
        Page::AuthCallback => view! { <AuthCallbackPage /> }.into_any(),
        Page::VerifySubscription => view! { <VerifySubscriptionPage /> }.into_any(),
    }
}

#[component]
fn PageHeading(page: Page) -> impl IntoView {
    view! { <h1 class=css::heading>{page.heading()}</h1> }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeading page=Page::Home />
        </section>
    }
}

#[component]
fn AccountPage() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeading page=Page::Account />
            <p class=css::actions>
                <Link to=paths::DELETE_ACCOUNT>"Delete account"</Link>
            </p>
        </section>
    }
}

#[component]
fn DeleteAccountPage() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeading page=Page::DeleteAccount />
            <p class=css::actions>
                <Link to=paths::ACCOUNT>"Back to account"</Link>
            </p>
        </section>
    }
}

#[component]
fn SignOutPage() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeading page=Page::SignOut />
        </section>
    }
}

#[component]
fn AuthCallbackPage() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeading page=Page::AuthCallback />
        </section>
    }
}

#[component]
fn VerifySubscriptionPage() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeading page=Page::VerifySubscription />
        </section>
    }
}

/// Shown instead of the root layout when no route matches.
#[component]
pub fn ErrorPage() -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    view! {
        <section class=css::errorPage>
            <h1 class=css::heading>"Oops!"</h1>
            <p>"Sorry, an unexpected error has occurred."</p>
            <p class=css::errorDetail>
                <i>"Not Found: " {move || router.location()}</i>
            </p>
            <p class=css::actions>
                <Link to=paths::HOME>"Go home"</Link>
            </p>
        </section>
    }
}
