//! # Token Catalog
//!
//! Derives the list of selectable tokens from the store's rates and the icon
//! table. A currency is offered only when it has both an icon and a price.
//! The list is sorted by price, highest first; equal prices keep icon-table
//! order.

use std::cmp::Ordering;
use std::collections::HashMap;

use shared::dto::market::{ExchangeRate, Token};

use super::icons::IconTable;
use super::rate_store::{latest_per_currency, RateStore};

/// Build the catalog from raw rates and an icon table.
///
/// Duplicate currencies in `rates` resolve to the latest-dated price, the
/// same rule the store applies when it ingests the feed.
pub fn derive_catalog(rates: &[ExchangeRate], icons: &IconTable) -> Vec<Token> {
    let prices: HashMap<String, f64> = latest_per_currency(rates)
        .into_iter()
        .map(|rate| (rate.currency, rate.price))
        .collect();

    let mut tokens: Vec<Token> = icons
        .iter()
        .filter_map(|(currency, icon)| {
            prices.get(currency).map(|&price| Token {
                currency: currency.to_string(),
                price,
                icon: icon.to_string(),
            })
        })
        .collect();

    // Stable: equal prices keep icon-table order
    tokens.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
    tokens
}

/// Memoized catalog keyed by the store's rate generation.
#[derive(Debug, Default)]
pub struct CatalogCache {
    generation: Option<u64>,
    tokens: Vec<Token>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog for the store's current rates, recomputed only when the
    /// rate list has been replaced since the last call.
    pub fn tokens(&mut self, store: &RateStore) -> &[Token] {
        if self.is_stale(store) {
            self.tokens = derive_catalog(store.rates(), store.icons());
            self.generation = Some(store.generation());
            tracing::debug!(
                generation = store.generation(),
                token_count = self.tokens.len(),
                "Token catalog recomputed"
            );
        }
        &self.tokens
    }

    pub fn is_stale(&self, store: &RateStore) -> bool {
        self.generation != Some(store.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::icons::default_icon_table;
    use crate::store::rate_store::tests::rate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn icons(currencies: &[&str]) -> IconTable {
        currencies
            .iter()
            .map(|c| (*c, format!("icons/{}.svg", c)))
            .collect()
    }

    fn currencies(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.currency.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_price_descending() {
        let rates = vec![rate("A", 0, 10.0), rate("B", 0, 50.0), rate("C", 0, 5.0)];
        let tokens = derive_catalog(&rates, &icons(&["A", "B", "C"]));

        assert_eq!(currencies(&tokens), vec!["B", "A", "C"]);
        assert_eq!(tokens[0].icon, "icons/B.svg");
        assert_eq!(tokens[0].price, 50.0);
    }

    #[test]
    fn test_requires_icon_and_price() {
        let rates = vec![rate("A", 0, 10.0), rate("NOICON", 0, 99.0)];
        let tokens = derive_catalog(&rates, &icons(&["A", "NOPRICE"]));

        assert_eq!(currencies(&tokens), vec!["A"]);
    }

    #[test]
    fn test_subset_of_icons_and_prices() {
        let table = icons(&["A", "B", "D", "F"]);
        let rate_sets = vec![
            vec![],
            vec![rate("A", 0, 1.0)],
            vec![rate("C", 0, 1.0), rate("E", 0, 2.0)],
            vec![rate("A", 0, 3.0), rate("B", 0, 3.0), rate("C", 0, 3.0), rate("F", 0, 0.0)],
        ];

        for rates in rate_sets {
            let tokens = derive_catalog(&rates, &table);
            for token in &tokens {
                assert!(table.get(&token.currency).is_some());
                assert!(rates.iter().any(|r| r.currency == token.currency));
            }
            for pair in tokens.windows(2) {
                assert!(pair[0].price >= pair[1].price);
            }
        }
    }

    #[test]
    fn test_equal_prices_keep_icon_order() {
        let rates = vec![rate("C", 0, 1.0), rate("B", 0, 1.0), rate("A", 0, 1.0)];
        let tokens = derive_catalog(&rates, &icons(&["B", "A", "C"]));

        assert_eq!(currencies(&tokens), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_duplicates_resolve_to_latest_price() {
        let rates = vec![rate("A", 0, 10.0), rate("A", 60, 12.0), rate("A", 30, 11.0)];
        let tokens = derive_catalog(&rates, &icons(&["A"]));

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].price, 12.0);
    }

    #[test]
    fn test_cache_recomputes_on_generation_change() {
        let mut store = RateStore::with_parts(default_icon_table(), StdRng::seed_from_u64(1));
        let mut cache = CatalogCache::new();

        assert!(cache.tokens(&store).is_empty());
        assert!(!cache.is_stale(&store));

        store.apply_fetch(Ok(vec![rate("ETH", 0, 1645.0), rate("USDC", 0, 1.0)])).unwrap();
        assert!(cache.is_stale(&store));
        assert_eq!(currencies(cache.tokens(&store)), vec!["ETH", "USDC"]);

        // Balance changes do not touch the rate list
        store.add_balance("ETH", 1.0);
        assert!(!cache.is_stale(&store));

        // Failed fetch keeps the generation
        let _ = store.apply_fetch(Err("offline".to_string()));
        assert!(!cache.is_stale(&store));
        assert_eq!(cache.tokens(&store).len(), 2);
    }
}
