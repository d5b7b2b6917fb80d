//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`market`] - Exchange rates from the price feed, wallet balances and
//!   the catalog entries offered by the token selector
//!
//! ## Serialization Format
//!
//! - **Field naming**: lowercase single words, identical in Rust and JSON
//! - **Dates**: RFC 3339 timestamps, parsed into `chrono::DateTime<Utc>`
//! - **Prices and amounts**: JSON numbers, `f64` in Rust

pub mod market;

pub use market::*;
