//! Utility modules for browser APIs.
//!
//! - [`dom`] - Window, history and document helpers

pub mod dom;
