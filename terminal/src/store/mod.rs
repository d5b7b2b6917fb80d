//! # Rate Store and Token Catalog
//!
//! Client-side market state for the swap widget.
//!
//! ## Data Flow
//!
//! ```text
//! price feed ──▶ RateStore ──(latest rate per currency)──▶ derive_catalog ──▶ TokenSelector
//!                   │                                         ▲
//!                   └── wallet balances        IconTable ─────┘
//! ```
//!
//! - **[`rate_store`]**: fetch lifecycle, price/balance/icon lookups, balance mutations
//! - **[`catalog`]**: pure catalog derivation plus a generation-keyed cache
//! - **[`icons`]**: static icon table and default wallet amounts

pub mod catalog;
pub mod icons;
pub mod rate_store;

pub use catalog::{derive_catalog, CatalogCache};
pub use icons::{default_icon_table, IconTable};
pub use rate_store::{latest_per_currency, FetchStatus, RateStore};
