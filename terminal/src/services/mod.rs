//! # External Services
//!
//! Integrations with the outside world. The swap terminal talks to exactly one
//! remote service: the public price feed.
//!
//! - **[`api`]**: reqwest-based price feed client implementing
//!   [`crate::core::service::PriceFeed`]

pub mod api;
