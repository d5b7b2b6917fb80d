//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI thread, the background fetch
//! task and the shared [`AppState`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - applies finished fetches              │   │
//! │  │  - handle_*() - swap form actions                    │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - RateStore, CatalogCache, SwapState                │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio runtime                                  │
//! │  - tasks::market::fetch_exchange_rates()                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event-Driven Communication
//!
//! The fetch task never touches the store's data. It sends
//! `AppEvent::RatesFetched` and the UI thread applies it in `on_tick()`, so
//! every store mutation happens on one thread and runs to completion. When
//! two fetches overlap, whichever result is applied last wins.
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types
//! - [`selector`]: Token selector state machine
//! - [`events`]: Event enum for async communication
//! - [`handlers`]: Swap form handlers
//! - [`tasks`]: Async background tasks

mod events;
mod handlers;
pub mod selector;
mod state;
mod tasks;

pub use events::AppEvent;
pub use handlers::swap::quote_output;
pub use selector::{IconView, Listing, Placement, TokenSelector};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::market::Token;
use tokio::runtime::Handle;

use crate::core::error::Result;
use crate::core::service::PriceFeed;
use crate::store::RateStore;

/// Main application orchestrator.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use swap_terminal::app::App;
/// use swap_terminal::services::api::ApiClient;
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let mut app = App::new(Arc::new(ApiClient::new()), runtime.handle().clone());
/// app.fetch_rates();
///
/// // In the egui update loop:
/// app.on_tick();
/// ```
pub struct App {
    /// Shared application state.
    ///
    /// Locks are held for a single frame or a single handler call.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into async tasks.
    event_tx: Sender<AppEvent>,

    /// Runtime the fetch tasks are spawned on.
    runtime: Handle,
}

impl App {
    /// Create an application with an empty default store.
    pub fn new(feed: Arc<dyn PriceFeed>, runtime: Handle) -> Self {
        Self::with_store(RateStore::new(), feed, runtime)
    }

    /// Create an application around an existing store.
    pub fn with_store(store: RateStore, feed: Arc<dyn PriceFeed>, runtime: Handle) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - Event channel created");

        Self {
            state: Arc::new(RwLock::new(AppState::new(store, feed))),
            event_rx,
            event_tx,
            runtime,
        }
    }

    /// Start a background fetch of the exchange rates.
    pub fn fetch_rates(&self) {
        tasks::market::fetch_exchange_rates(self.state.clone(), self.event_tx.clone(), &self.runtime);
    }

    /// Apply every finished task result. Returns the number of events handled.
    pub fn on_tick(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Apply one task result to the state.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::RatesFetched(result) => {
                let mut state = self.state.write();
                state.fetches_in_flight = state.fetches_in_flight.saturating_sub(1);
                if let Err(e) = state.store.apply_fetch(result) {
                    tracing::warn!(error = %e, "Exchange rates not updated");
                }
            }
        }
    }

    /// Current token catalog.
    pub fn tokens(&self) -> Vec<Token> {
        self.state.write().tokens()
    }

    pub fn handle_token_select(&self, token: Token, target: TokenPickerTarget) {
        handlers::swap::handle_token_select(&mut self.state.write(), token, target);
    }

    pub fn handle_flip_click(&self) {
        handlers::swap::flip_tokens(&mut self.state.write());
    }

    pub fn handle_swap_execute_click(&self) -> Result<SwapReceipt> {
        handlers::swap::execute_swap(&mut self.state.write())
    }
}
