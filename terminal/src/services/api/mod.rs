//! # Price Feed Client Module
//!
//! HTTP client for the public price feed that backs the rate store.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and PriceFeed implementation
//! └── market.rs   - Exchange rate endpoint and body parsing
//! ```

pub mod client;
pub mod market;

pub use client::ApiClient;
pub use market::*;
