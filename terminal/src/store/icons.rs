//! # Static Token Tables
//!
//! The currency→icon table supplied by the host application, and the default
//! wallet amounts used to seed simulated balances.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Base URL of the public token icon set
const ICON_BASE_URL: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Currencies with a known icon, in display order.
const ICON_CURRENCIES: &[&str] = &[
    "BLUR", "bNEO", "BUSD", "USD", "ETH", "GMX", "STEVMOS", "LUNA", "RATOM", "STRD", "EVMOS",
    "IBCX", "IRIS", "ampLUNA", "KUJI", "STOSMO", "USDC", "axlUSDC", "ATOM", "STATOM", "OSMO",
    "rSWTH", "STLUNA", "LSI", "OKB", "OKT", "SWTH", "USC", "WBTC", "wstETH", "YieldUSD", "ZIL",
];

/// Default simulated wallet amount per currency.
pub static DEFAULT_WALLET_AMOUNTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("BLUR", 1000.0),
        ("bNEO", 50.0),
        ("BUSD", 2500.0),
        ("USD", 10000.0),
        ("ETH", 0.5),
        ("GMX", 10.0),
        ("STEVMOS", 500.0),
        ("LUNA", 200.0),
        ("RATOM", 25.0),
        ("STRD", 100.0),
        ("EVMOS", 1000.0),
        ("IBCX", 5.0),
        ("IRIS", 5000.0),
        ("ampLUNA", 150.0),
        ("KUJI", 100.0),
        ("STOSMO", 200.0),
        ("USDC", 5000.0),
        ("axlUSDC", 2000.0),
        ("ATOM", 30.0),
        ("STATOM", 20.0),
        ("OSMO", 500.0),
        ("rSWTH", 10000.0),
        ("STLUNA", 100.0),
        ("LSI", 5.0),
        ("OKB", 10.0),
        ("OKT", 15.0),
        ("SWTH", 50000.0),
        ("USC", 1000.0),
        ("WBTC", 0.01),
        ("wstETH", 0.25),
        ("YieldUSD", 1000.0),
        ("ZIL", 10000.0),
    ])
});

/// Ordered mapping from currency identifier to icon path or URL.
///
/// Iteration follows insertion order; the catalog relies on it to break
/// price ties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconTable {
    entries: Vec<(String, String)>,
}

impl IconTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the icon for `currency`. Replacing keeps the
    /// original position.
    pub fn insert(&mut self, currency: impl Into<String>, icon: impl Into<String>) {
        let currency = currency.into();
        let icon = icon.into();
        match self.entries.iter_mut().find(|(c, _)| *c == currency) {
            Some(entry) => entry.1 = icon,
            None => self.entries.push((currency, icon)),
        }
    }

    pub fn get(&self, currency: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == currency)
            .map(|(_, icon)| icon.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, i)| (c.as_str(), i.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Into<String>, I: Into<String>> FromIterator<(C, I)> for IconTable {
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        let mut table = IconTable::new();
        for (currency, icon) in iter {
            table.insert(currency, icon);
        }
        table
    }
}

/// Icon table pointing every known currency at the public SVG icon set.
pub fn default_icon_table() -> IconTable {
    ICON_CURRENCIES
        .iter()
        .map(|c| (*c, format!("{}/{}.svg", ICON_BASE_URL, c)))
        .collect()
}
