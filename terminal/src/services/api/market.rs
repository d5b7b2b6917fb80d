//! # Market Data Endpoints
//!
//! Exchange rate retrieval from the price feed.

use shared::dto::market::ExchangeRate;
use super::client::ApiClient;

/// Get the raw exchange rate list.
///
/// Any network error, non-success status or malformed body is reported as a
/// descriptive message; the caller decides what to keep.
#[tracing::instrument(skip(client), fields(url = %client.prices_url()))]
pub async fn get_exchange_rates(client: &ApiClient) -> Result<Vec<ExchangeRate>, String> {
    let start = std::time::Instant::now();

    tracing::debug!("Fetching exchange rates");

    let response = client
        .client
        .get(client.prices_url())
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Exchange rate fetch network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Exchange rate fetch failed"
        );
        return Err(format!("Failed to fetch prices: {}", status));
    }

    let body = response.text().await.map_err(|e| {
        tracing::error!(error = %e, "Exchange rate body read error");
        format!("Failed to read response: {}", e)
    })?;

    let rates = parse_exchange_rates(&body)?;

    tracing::debug!(
        duration_ms = duration.as_millis(),
        rate_count = rates.len(),
        "Exchange rates fetched successfully"
    );

    Ok(rates)
}

/// Parse a price feed body into exchange rates.
pub fn parse_exchange_rates(body: &str) -> Result<Vec<ExchangeRate>, String> {
    serde_json::from_str::<Vec<ExchangeRate>>(body).map_err(|e| {
        tracing::error!(error = %e, "Exchange rate response parse error");
        format!("Failed to parse response: {}", e)
    })
}
