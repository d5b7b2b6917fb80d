//! # Common Error Types
//!
//! Consolidated error handling for the swap terminal.
//!
//! ## Error Categories
//!
//! - **Fetch**: Price feed failures (network, non-success status, body parse)
//! - **Validation**: Swap form input rejected before any balance is touched
//!
//! Missing prices, balances and icons are not errors: lookups degrade to
//! zero or empty values. Icon load failures are absorbed by the token
//! selector's fallback badge and never reach this type.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use swap_terminal::core::error::AppError;
//!
//! fn validate_amount(amount: f64) -> Result<f64, AppError> {
//!     if amount <= 0.0 {
//!         return Err(AppError::Validation("Amount must be positive".to_string()));
//!     }
//!     Ok(amount)
//! }
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use swap_terminal::core::error::AppError;
///
/// let fetch_err = AppError::Fetch("Failed to fetch prices: 503 Service Unavailable".to_string());
/// let validation_err = AppError::Validation("Insufficient ETH balance".to_string());
///
/// assert_eq!(fetch_err.to_string(), "Failed to fetch prices: 503 Service Unavailable");
/// assert_eq!(validation_err.to_string(), "Validation error: Insufficient ETH balance");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Price feed request failed.
    ///
    /// The message is shown verbatim in the store's error slot, so it carries
    /// no prefix of its own.
    #[error("{0}")]
    Fetch(String),

    /// Swap input validation error.
    ///
    /// - Missing token on either side of the swap
    /// - Same token on both sides
    /// - Amount not a positive number, or larger than the balance
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Fetch(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Fetch(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_converts_to_fetch_error() {
        let err: AppError = "Network error: connection refused".into();
        assert_eq!(err, AppError::Fetch("Network error: connection refused".to_string()));
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
