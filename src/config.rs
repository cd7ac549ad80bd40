//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Everything here is fixed at build time; there is no runtime configuration.

use crate::models::{NavLink, Page, RouteEntry};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used for the document title and the logo's context.
pub const APP_NAME: &str = "SaintSpace";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

/// Id of the element the application mounts into (see `index.html`).
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Static Assets
// =============================================================================

/// Navbar logo image.
pub const LOGO_SRC: &str = "/saintspace-crossball-logo-128.png";

/// Alt text for the navbar logo.
pub const LOGO_ALT: &str = "logo";

// =============================================================================
// Route Paths
// =============================================================================

/// Route paths, absolute and without trailing slash.
pub mod paths {
    pub const HOME: &str = "/";
    pub const ACCOUNT: &str = "/saintspace/universe/account";
    pub const DELETE_ACCOUNT: &str = "/saintspace/universe/account/delete";
    pub const SIGN_OUT: &str = "/saintspace/universe/auth/signout";
    pub const AUTH_CALLBACK: &str = "/saintspace/universe/auth/callback";
    pub const VERIFY_SUBSCRIPTION: &str = "/saintspace/universe/verify-subscription";
}

/// Builds the application's route table.
///
/// A single layout entry at `/` wraps every page. Child paths are joined onto
/// their parent's path (surrounding slashes are ignored); the index entry
/// mounts at the parent's path itself.
pub fn route_entries() -> Vec<RouteEntry> {
    vec![RouteEntry::layout(
        paths::HOME,
        vec![
            RouteEntry::index(Page::Home),
            RouteEntry::page(paths::ACCOUNT, Page::Account),
            RouteEntry::page(paths::DELETE_ACCOUNT, Page::DeleteAccount),
            RouteEntry::page(paths::SIGN_OUT, Page::SignOut),
            RouteEntry::page(paths::AUTH_CALLBACK, Page::AuthCallback),
            RouteEntry::page(paths::VERIFY_SUBSCRIPTION, Page::VerifySubscription),
        ],
    )]
}

// =============================================================================
// Navigation Drawer
// =============================================================================

/// Links shown in the navigation drawer, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        to: paths::HOME,
        aria_label: "Home",
    },
    NavLink {
        label: "Account",
        to: paths::ACCOUNT,
        aria_label: "Account",
    },
    NavLink {
        label: "Sign Out",
        to: paths::SIGN_OUT,
        aria_label: "Sign Out",
    },
];

/// Side of the viewport the drawer slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum DrawerPosition {
    Left,
    #[default]
    Right,
}

/// Current drawer position.
pub const DRAWER_POSITION: DrawerPosition = DrawerPosition::Right;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
