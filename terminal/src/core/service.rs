//! # Service Traits
//!
//! Traits for dependency injection, enabling tests to run the store and the
//! application shell against an in-memory price feed.

use async_trait::async_trait;
use shared::dto::market::ExchangeRate;

/// Source of exchange rates.
///
/// The production implementation is [`crate::services::api::ApiClient`],
/// which performs one HTTP GET per call. Errors are human-readable messages
/// suitable for display.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch the raw (possibly duplicated) list of exchange rates.
    async fn fetch_exchange_rates(&self) -> Result<Vec<ExchangeRate>, String>;
}
