//! # Event Handlers
//!
//! User action handlers. They operate on an already-locked [`AppState`] so
//! they can be exercised directly in tests.
//!
//! [`AppState`]: crate::app::AppState

pub mod swap;
