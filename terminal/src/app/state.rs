//! # Application State Types
//!
//! Everything the swap window reads and mutates: the rate store, the cached
//! catalog and the swap form with its two token selectors.

use std::sync::Arc;

use shared::dto::market::Token;

use crate::app::selector::TokenSelector;
use crate::core::service::PriceFeed;
use crate::store::{CatalogCache, RateStore};

/// Which side of the swap a token picker fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPickerTarget {
    /// Token being sold
    Input,
    /// Token being bought
    Output,
}

impl TokenPickerTarget {
    pub fn other(self) -> Self {
        match self {
            TokenPickerTarget::Input => TokenPickerTarget::Output,
            TokenPickerTarget::Output => TokenPickerTarget::Input,
        }
    }
}

/// Outcome of the last swap attempt, shown under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapStatus {
    Completed(SwapReceipt),
    Rejected(String),
}

/// Balances moved by a completed swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapReceipt {
    pub input_currency: String,
    pub input_amount: f64,
    pub output_currency: String,
    pub output_amount: f64,
}

/// Swap form state
#[derive(Debug, Default)]
pub struct SwapState {
    /// Token being sold
    pub input_token: Option<Token>,
    /// Token being bought
    pub output_token: Option<Token>,
    /// Amount to swap (as string for input handling)
    pub amount: String,
    /// Picker for the input side
    pub input_picker: TokenSelector,
    /// Picker for the output side
    pub output_picker: TokenSelector,
    /// Result of the last swap attempt
    pub status: Option<SwapStatus>,
}

impl SwapState {
    pub fn token(&self, target: TokenPickerTarget) -> Option<&Token> {
        match target {
            TokenPickerTarget::Input => self.input_token.as_ref(),
            TokenPickerTarget::Output => self.output_token.as_ref(),
        }
    }

    pub fn token_mut(&mut self, target: TokenPickerTarget) -> &mut Option<Token> {
        match target {
            TokenPickerTarget::Input => &mut self.input_token,
            TokenPickerTarget::Output => &mut self.output_token,
        }
    }
}

/// Complete application state
pub struct AppState {
    /// Exchange rates and wallet balances
    pub store: RateStore,
    /// Catalog derived from `store`
    pub catalog: CatalogCache,
    /// Swap form
    pub swap: SwapState,
    /// Price feed used by fetch tasks
    pub feed: Arc<dyn PriceFeed>,
    /// Fetches spawned but not yet applied
    pub fetches_in_flight: usize,
}

impl AppState {
    pub fn new(store: RateStore, feed: Arc<dyn PriceFeed>) -> Self {
        Self {
            store,
            catalog: CatalogCache::new(),
            swap: SwapState::default(),
            feed,
            fetches_in_flight: 0,
        }
    }

    /// Current catalog, recomputed if the rates changed.
    pub fn tokens(&mut self) -> Vec<Token> {
        self.catalog.tokens(&self.store).to_vec()
    }
}
