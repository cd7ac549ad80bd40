//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Root layout wrapping every matched page
//! - [`navbar`] - Navigation bar and drawer
//! - [`link`] - Router-aware anchor
//! - [`pages`] - Routed pages and the not-found page
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod layout;
pub mod link;
pub mod navbar;
pub mod pages;
pub mod router;

pub use router::AppRouter;
