//! # Utility Functions
//!
//! - **[`validation`]**: Swap form validation (amount, token pair)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate number formatting
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
