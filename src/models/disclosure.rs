//! Open/closed state for disclosure widgets such as the navigation drawer.

use leptos::prelude::*;

/// Two-state disclosure: a panel is either shown or hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureState {
    /// Hidden (initial state)
    #[default]
    Closed,
    /// Shown
    Open,
}

impl DisclosureState {
    /// Transition for `open()`. Opening an open panel is a no-op.
    pub fn open(self) -> Self {
        Self::Open
    }

    /// Transition for `close()`. Closing a closed panel is a no-op.
    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Reactive disclosure handle owned by a single component instance.
///
/// `Copy` because the only field is a signal, so it can be moved into any
/// number of event handlers. The state lives as long as the owning component
/// and starts [`DisclosureState::Closed`] on every mount.
#[derive(Clone, Copy)]
pub struct Disclosure {
    state: RwSignal<DisclosureState>,
}

impl Disclosure {
    /// Creates a closed disclosure.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DisclosureState::Closed),
        }
    }

    pub fn open(&self) {
        self.state.update(|s| *s = s.open());
    }

    pub fn close(&self) {
        self.state.update(|s| *s = s.close());
    }

    /// Current state (tracked when read inside a reactive scope).
    pub fn state(&self) -> DisclosureState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new()
    }
}
