//! # API Client
//!
//! Main HTTP client for price feed communication.

use reqwest::Client;
use shared::dto::market::ExchangeRate;
use crate::core::service::PriceFeed;

/// Fixed URL of the price feed
const PRICES_API_URL: &str = "https://interview.switcheo.com/prices.json";

/// HTTP client for the price feed.
///
/// No request timeout is configured: a stalled feed keeps the store in its
/// loading state until the transport gives up.
pub struct ApiClient {
    pub(crate) client: Client,
    prices_url: String,
}

impl ApiClient {
    /// Create a client pointed at the public price feed.
    pub fn new() -> Self {
        Self::with_prices_url(PRICES_API_URL)
    }

    /// Create a client pointed at an alternative feed (mirrors, local fixtures).
    pub fn with_prices_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            prices_url: url.into(),
        }
    }

    /// URL the exchange rates are fetched from.
    pub(crate) fn prices_url(&self) -> &str {
        &self.prices_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PriceFeed for ApiClient {
    async fn fetch_exchange_rates(&self) -> Result<Vec<ExchangeRate>, String> {
        crate::services::api::market::get_exchange_rates(self).await
    }
}
