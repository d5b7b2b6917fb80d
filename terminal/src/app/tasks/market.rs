//! # Market Data Tasks
//!
//! Async task fetching exchange rates from the price feed.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Fetch exchange rates in the background.
///
/// The store enters its loading state immediately; the response is delivered
/// as [`AppEvent::RatesFetched`] and applied on the UI thread. Overlapping
/// calls are not de-duplicated.
pub(crate) fn fetch_exchange_rates(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    runtime: &Handle,
) {
    let feed = {
        let mut state = state.write();
        state.store.begin_fetch();
        state.fetches_in_flight += 1;
        Arc::clone(&state.feed)
    }; // Lock released here

    runtime.spawn(async move {
        let result = feed.fetch_exchange_rates().await;

        match &result {
            Ok(rates) => tracing::debug!(rate_count = rates.len(), "Price feed responded"),
            Err(e) => tracing::error!(error = %e, "Price feed request failed"),
        }

        if event_tx.send(AppEvent::RatesFetched(result)).await.is_err() {
            tracing::warn!("Event channel closed before exchange rates were delivered");
        }
    });
}
