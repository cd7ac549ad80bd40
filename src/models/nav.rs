//! Navigation link descriptors for the drawer.

/// A fixed link in the navigation drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible link text.
    pub label: &'static str,
    /// Absolute target path.
    pub to: &'static str,
    /// Accessible name announced by screen readers.
    pub aria_label: &'static str,
}
