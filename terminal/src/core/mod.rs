//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`PriceFeed`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use swap_terminal::core::service::PriceFeed;
//!
//! // In production: the HTTP client
//! let feed: Arc<dyn PriceFeed> = Arc::new(swap_terminal::services::api::ApiClient::new());
//!
//! // In tests: a canned feed
//! let feed: Arc<dyn PriceFeed> = Arc::new(MockFeed::new(rates));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::PriceFeed;
