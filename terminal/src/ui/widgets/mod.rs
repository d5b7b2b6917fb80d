//! # Reusable UI Widgets
//!
//! Common widgets used by the swap screen.

pub mod token_icon;
pub mod token_picker;
