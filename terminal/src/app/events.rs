//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::dto::market::ExchangeRate;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Price feed request finished
    RatesFetched(Result<Vec<ExchangeRate>, String>),
}
