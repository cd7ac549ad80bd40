//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Page`] - Pages the router can mount
//! - [`RouteEntry`], [`RouteTable`], [`Resolution`] - Static, validated route table
//! - [`Disclosure`], [`DisclosureState`] - Open/closed state for the drawer
//! - [`NavLink`] - Drawer link descriptors

mod disclosure;
mod nav;
mod page;
mod route;

pub use disclosure::{Disclosure, DisclosureState};
pub use nav::NavLink;
pub use page::Page;
pub use route::{Resolution, RouteEntry, RouteTable, RouteTableError, normalize_location};
