//! # Async Tasks
//!
//! Background work spawned on the Tokio runtime. Results travel back to the
//! UI thread as [`crate::app::AppEvent`]s.

pub mod market;
