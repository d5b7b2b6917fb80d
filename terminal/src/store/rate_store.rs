//! # Rate Store
//!
//! Owned state holding the last fetched exchange rates and the simulated
//! wallet balances derived from them.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──begin_fetch──▶ Loading ──apply_fetch(Ok)──▶ Ready
//!                          │
//!                          └────apply_fetch(Err)──▶ Error (previous data kept)
//! ```
//!
//! A fetch is split in two so the UI thread never waits on the network:
//! [`RateStore::begin_fetch`] runs before the request is spawned and
//! [`RateStore::apply_fetch`] runs when the response arrives.
//! [`RateStore::fetch_rates`] composes both around a single `await`.
//! Overlapping fetches are not de-duplicated; the last result applied wins.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::dto::market::{ExchangeRate, WalletToken};

use super::icons::{default_icon_table, IconTable, DEFAULT_WALLET_AMOUNTS};
use crate::core::error::{AppError, Result};
use crate::core::service::PriceFeed;

/// Fetch lifecycle as observed from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing fetched yet
    Idle,
    /// Request outstanding
    Loading,
    /// Last request succeeded
    Ready,
    /// Last request failed; previous rates are still served
    Error,
}

/// Keep one rate per currency: the one with the latest date.
///
/// Output follows the order in which currencies first appear. On equal dates
/// the first observation wins.
pub fn latest_per_currency(rates: &[ExchangeRate]) -> Vec<ExchangeRate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut latest: Vec<ExchangeRate> = Vec::new();

    for rate in rates {
        match index.get(rate.currency.as_str()) {
            Some(&i) => {
                if rate.is_newer_than(&latest[i]) {
                    latest[i] = rate.clone();
                }
            }
            None => {
                index.insert(rate.currency.as_str(), latest.len());
                latest.push(rate.clone());
            }
        }
    }

    latest
}

/// Exchange rates plus simulated wallet balances.
///
/// Lookups never fail: an unknown currency has price 0, balance 0 and an
/// empty icon path. Balance mutations on untracked currencies are no-ops.
pub struct RateStore {
    rates: Vec<ExchangeRate>,
    wallet_tokens: Vec<WalletToken>,
    loading: bool,
    error: Option<String>,
    /// Bumped every time `rates` is replaced
    generation: u64,
    icons: IconTable,
    rng: StdRng,
}

impl std::fmt::Debug for RateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateStore")
            .field("rates", &self.rates.len())
            .field("wallet_tokens", &self.wallet_tokens.len())
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Default for RateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RateStore {
    /// Empty store with the default icon table and an OS-seeded random source.
    pub fn new() -> Self {
        Self::with_parts(default_icon_table(), StdRng::from_os_rng())
    }

    /// Empty store with explicit icon table and random source.
    ///
    /// Tests pass `StdRng::seed_from_u64(..)` to make the balances seeded for
    /// unknown currencies deterministic.
    pub fn with_parts(icons: IconTable, rng: StdRng) -> Self {
        Self {
            rates: Vec::new(),
            wallet_tokens: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
            icons,
            rng,
        }
    }

    // ==================== FETCH ====================

    /// Fetch rates from `feed` and apply the result.
    pub async fn fetch_rates(&mut self, feed: &dyn PriceFeed) -> Result<usize> {
        self.begin_fetch();
        let result = feed.fetch_exchange_rates().await;
        self.apply_fetch(result)
    }

    /// Enter the loading state and clear the previous error.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a feed response.
    ///
    /// On success the rates are deduplicated, stored, and the wallet is
    /// regenerated; the number of distinct currencies is returned. On failure
    /// only the error message and loading flag change.
    pub fn apply_fetch(&mut self, result: std::result::Result<Vec<ExchangeRate>, String>) -> Result<usize> {
        self.loading = false;

        let raw = match result {
            Ok(raw) => raw,
            Err(message) => {
                tracing::warn!(error = %message, "Price feed fetch failed, keeping previous rates");
                self.error = Some(message.clone());
                return Err(AppError::Fetch(message));
            }
        };

        let rates = latest_per_currency(&raw);
        let rng = &mut self.rng;
        let wallet_tokens: Vec<WalletToken> = rates
            .iter()
            .map(|rate| WalletToken {
                currency: rate.currency.clone(),
                amount: DEFAULT_WALLET_AMOUNTS
                    .get(rate.currency.as_str())
                    .copied()
                    .unwrap_or_else(|| f64::from(rng.random_range(1..=100u32))),
            })
            .collect();

        tracing::info!(
            raw_count = raw.len(),
            currency_count = rates.len(),
            "Exchange rates applied"
        );

        self.rates = rates;
        self.wallet_tokens = wallet_tokens;
        self.error = None;
        self.generation += 1;

        Ok(self.rates.len())
    }

    // ==================== READ ====================

    /// Stored price for `currency`, or 0.
    pub fn price(&self, currency: &str) -> f64 {
        self.rates
            .iter()
            .find(|r| r.currency == currency)
            .map(|r| r.price)
            .unwrap_or(0.0)
    }

    /// Stored wallet amount for `currency`, or 0.
    pub fn balance(&self, currency: &str) -> f64 {
        self.wallet_tokens
            .iter()
            .find(|t| t.currency == currency)
            .map(|t| t.amount)
            .unwrap_or(0.0)
    }

    /// Icon path for `currency`, or "" when unmapped.
    pub fn icon(&self, currency: &str) -> &str {
        self.icons.get(currency).unwrap_or("")
    }

    pub fn rates(&self) -> &[ExchangeRate] {
        &self.rates
    }

    pub fn wallet_tokens(&self) -> &[WalletToken] {
        &self.wallet_tokens
    }

    pub fn icons(&self) -> &IconTable {
        &self.icons
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Identity of the current rate list; changes whenever it is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> FetchStatus {
        if self.loading {
            FetchStatus::Loading
        } else if self.error.is_some() {
            FetchStatus::Error
        } else if self.generation > 0 {
            FetchStatus::Ready
        } else {
            FetchStatus::Idle
        }
    }

    // ==================== MUTATE ====================

    /// Replace the amount held for `currency`.
    pub fn update_balance(&mut self, currency: &str, amount: f64) {
        if let Some(token) = self.wallet_token_mut(currency) {
            token.amount = amount;
        }
    }

    /// Subtract `amount`, clamping at zero.
    pub fn deduct_balance(&mut self, currency: &str, amount: f64) {
        if let Some(token) = self.wallet_token_mut(currency) {
            token.amount = (token.amount - amount).max(0.0);
        }
    }

    pub fn add_balance(&mut self, currency: &str, amount: f64) {
        if let Some(token) = self.wallet_token_mut(currency) {
            token.amount += amount;
        }
    }

    fn wallet_token_mut(&mut self, currency: &str) -> Option<&mut WalletToken> {
        let token = self.wallet_tokens.iter_mut().find(|t| t.currency == currency);
        if token.is_none() {
            tracing::debug!(currency = %currency, "Balance change ignored for untracked currency");
        }
        token
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    pub(crate) fn rate(currency: &str, secs: i64, price: f64) -> ExchangeRate {
        ExchangeRate {
            currency: currency.to_string(),
            date: Utc.timestamp_opt(1_693_292_400 + secs, 0).unwrap(),
            price,
        }
    }

    struct CannedFeed(std::result::Result<Vec<ExchangeRate>, String>);

    #[async_trait]
    impl PriceFeed for CannedFeed {
        async fn fetch_exchange_rates(&self) -> std::result::Result<Vec<ExchangeRate>, String> {
            self.0.clone()
        }
    }

    fn seeded_store() -> RateStore {
        RateStore::with_parts(default_icon_table(), StdRng::seed_from_u64(7))
    }

    fn loaded_store() -> RateStore {
        let mut store = seeded_store();
        store
            .apply_fetch(Ok(vec![rate("ETH", 0, 1645.93), rate("USDC", 0, 1.0)]))
            .unwrap();
        store
    }

    // ========== Dedup Tests ==========

    #[test]
    fn test_latest_per_currency_keeps_max_date() {
        let rates = vec![
            rate("ETH", 10, 1600.0),
            rate("USDC", 0, 1.0),
            rate("ETH", 30, 1650.0),
            rate("ETH", 20, 1620.0),
        ];

        let latest = latest_per_currency(&rates);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].currency, "ETH");
        assert_eq!(latest[0].price, 1650.0);
        assert_eq!(latest[1].currency, "USDC");
    }

    #[test]
    fn test_latest_per_currency_tie_keeps_first() {
        let rates = vec![rate("ETH", 10, 1600.0), rate("ETH", 10, 1700.0)];
        let latest = latest_per_currency(&rates);
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].price, 1600.0);
    }

    // ========== Fetch Tests ==========

    #[test]
    fn test_new_store_is_idle() {
        let store = seeded_store();
        assert_eq!(store.status(), FetchStatus::Idle);
        assert!(store.rates().is_empty());
        assert!(store.wallet_tokens().is_empty());
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_begin_fetch_sets_loading_and_clears_error() {
        let mut store = seeded_store();
        let _ = store.apply_fetch(Err("boom".to_string()));
        assert_eq!(store.status(), FetchStatus::Error);

        store.begin_fetch();
        assert!(store.is_loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.status(), FetchStatus::Loading);
    }

    #[tokio::test]
    async fn test_fetch_rates_dedups_and_seeds_wallet() {
        let mut store = seeded_store();
        let feed = CannedFeed(Ok(vec![
            rate("ETH", 0, 1600.0),
            rate("ETH", 60, 1645.93),
            rate("WBTC", 0, 26000.0),
            rate("NEWCOIN", 0, 3.0),
        ]));

        let count = store.fetch_rates(&feed).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(store.status(), FetchStatus::Ready);
        assert_eq!(store.price("ETH"), 1645.93);
        assert_eq!(store.balance("ETH"), 0.5);
        assert_eq!(store.balance("WBTC"), 0.01);

        let seeded = store.balance("NEWCOIN");
        assert!((1.0..=100.0).contains(&seeded));
        assert_eq!(seeded.fract(), 0.0);
        assert_eq!(store.wallet_tokens().len(), 3);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let feed = vec![rate("AAA", 0, 1.0), rate("BBB", 0, 2.0)];

        let mut first = seeded_store();
        first.apply_fetch(Ok(feed.clone())).unwrap();
        let mut second = seeded_store();
        second.apply_fetch(Ok(feed)).unwrap();

        assert_eq!(first.wallet_tokens(), second.wallet_tokens());
    }

    #[tokio::test]
    async fn test_failed_fetch_preserves_previous_data() {
        let mut store = loaded_store();
        store.deduct_balance("ETH", 0.2);
        let rates_before = store.rates().to_vec();
        let wallet_before = store.wallet_tokens().to_vec();
        let generation = store.generation();

        let feed = CannedFeed(Err("Failed to fetch prices: 503 Service Unavailable".to_string()));
        let err = store.fetch_rates(&feed).await.unwrap_err();

        assert_eq!(err, AppError::Fetch("Failed to fetch prices: 503 Service Unavailable".to_string()));
        assert_eq!(store.error(), Some("Failed to fetch prices: 503 Service Unavailable"));
        assert!(!store.is_loading());
        assert_eq!(store.status(), FetchStatus::Error);
        assert_eq!(store.rates(), rates_before.as_slice());
        assert_eq!(store.wallet_tokens(), wallet_before.as_slice());
        assert_eq!(store.generation(), generation);
    }

    #[test]
    fn test_refetch_replaces_wallet() {
        let mut store = loaded_store();
        store.add_balance("USDC", 10.0);
        store.apply_fetch(Ok(vec![rate("USDC", 0, 1.0)])).unwrap();

        assert_eq!(store.balance("USDC"), 5000.0);
        assert_eq!(store.balance("ETH"), 0.0);
        assert_eq!(store.generation(), 2);
    }

    // ========== Lookup Tests ==========

    #[test]
    fn test_missing_data_defaults() {
        let store = loaded_store();
        assert_eq!(store.price("DOGE"), 0.0);
        assert_eq!(store.balance("DOGE"), 0.0);
        assert_eq!(store.icon("DOGE"), "");
        assert!(store.icon("ETH").ends_with("/ETH.svg"));
    }

    // ========== Balance Tests ==========

    #[test]
    fn test_update_balance() {
        let mut store = loaded_store();
        store.update_balance("ETH", 3.0);
        assert_eq!(store.balance("ETH"), 3.0);

        store.update_balance("DOGE", 3.0);
        assert_eq!(store.balance("DOGE"), 0.0);
        assert_eq!(store.wallet_tokens().len(), 2);
    }

    #[test]
    fn test_deduct_balance_never_negative() {
        let mut store = loaded_store();
        for amount in [0.0, 0.1, 0.4, 10.0, f64::MAX] {
            store.update_balance("ETH", 0.5);
            store.deduct_balance("ETH", amount);
            assert!(store.balance("ETH") >= 0.0, "deduct {} went negative", amount);
        }

        store.update_balance("ETH", 0.5);
        store.deduct_balance("ETH", 2.0);
        assert_eq!(store.balance("ETH"), 0.0);
    }

    #[test]
    fn test_add_then_deduct_round_trip() {
        let mut store = loaded_store();
        let original = store.balance("USDC");

        store.add_balance("USDC", 250.0);
        assert_eq!(store.balance("USDC"), original + 250.0);
        store.deduct_balance("USDC", 250.0);
        assert_eq!(store.balance("USDC"), original);
    }

    #[test]
    fn test_mutations_on_untracked_currency_are_noops() {
        let mut store = loaded_store();
        let before = store.wallet_tokens().to_vec();

        store.add_balance("DOGE", 5.0);
        store.deduct_balance("DOGE", 5.0);

        assert_eq!(store.wallet_tokens(), before.as_slice());
    }
}
