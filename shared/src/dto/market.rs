//! # Market DTOs
//!
//! Exchange rates as delivered by the price feed, the simulated wallet
//! balances derived from them, and the catalog tokens presented for selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped price observation for one currency.
///
/// The feed may deliver several observations for the same currency; consumers
/// keep the one with the latest `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Currency identifier (e.g. "ETH")
    pub currency: String,
    /// Observation timestamp
    pub date: DateTime<Utc>,
    /// Price in USD
    pub price: f64,
}

impl ExchangeRate {
    /// True when this observation is strictly more recent than `other`.
    pub fn is_newer_than(&self, other: &ExchangeRate) -> bool {
        self.date > other.date
    }
}

/// Simulated wallet balance for one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletToken {
    pub currency: String,
    pub amount: f64,
}

/// A selectable catalog entry: a priced currency with an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub currency: String,
    pub price: f64,
    /// Icon resource path or URL
    pub icon: String,
}
