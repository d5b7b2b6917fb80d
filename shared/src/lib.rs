//! # Shared Market Types Library
//!
//! This library defines the data contract between the price feed and any
//! front-end of the swap widget. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::market`]**: Exchange rates, wallet balances and catalog tokens
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_price`]**: Format a price the way the token list shows it
//!   - **[`utils::format_number`]**: Format numbers with comma separators
//!
//! ## Wire Format
//!
//! The price feed returns a JSON array of exchange rates:
//!
//! ```text
//! [
//!   { "currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93 },
//!   { "currency": "USDC", "date": "2023-08-29T07:10:40.000Z", "price": 0.9998 }
//! ]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::market::ExchangeRate;
//!
//! let body = r#"[{"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.93}]"#;
//! let rates: Vec<ExchangeRate> = serde_json::from_str(body).unwrap();
//! assert_eq!(rates[0].currency, "ETH");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
