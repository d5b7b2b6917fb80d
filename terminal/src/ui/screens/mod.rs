//! # Screen Modules
//!
//! ## Rendering Pattern
//!
//! Screens render from the locked [`crate::app::AppState`] and return the
//! actions the user triggered this frame:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &mut AppState, theme: &Theme) -> Vec<UiAction> {
//!     // - Read from state
//!     // - Let widgets update their own selector state
//!     // - Push UiAction for anything that needs an App method
//! }
//! ```
//!
//! Actions are dispatched after the lock is dropped, since some of them
//! (refresh) spawn tasks that take the lock themselves.

pub mod swap;
