/// Validation utilities for swap form input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Parse a swap amount entered by the user.
///
/// Accepts plain decimals and tolerates thousands separators ("1,000.5").
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate a swap amount against the available balance
pub fn validate_amount(input: &str, balance: f64) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::err("Amount is required");
    }

    let amount = match parse_amount(input) {
        Some(amount) => amount,
        None => return ValidationResult::err("Amount must be a number"),
    };

    if amount <= 0.0 {
        return ValidationResult::err("Amount must be greater than 0");
    }

    if amount > balance {
        return ValidationResult::err("Insufficient balance");
    }

    ValidationResult::ok()
}

/// Validate the token pair of a swap
pub fn validate_pair(input: Option<&str>, output: Option<&str>) -> ValidationResult {
    match (input, output) {
        (None, _) => ValidationResult::err("Select a token to sell"),
        (_, None) => ValidationResult::err("Select a token to buy"),
        (Some(a), Some(b)) if a == b => ValidationResult::err("Cannot swap a token for itself"),
        _ => ValidationResult::ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.5"), Some(1.5));
        assert_eq!(parse_amount(" 1,000.25 "), Some(1000.25));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_amount_validation() {
        assert!(validate_amount("0.5", 1.0).is_valid);
        assert!(validate_amount("1", 1.0).is_valid);
        assert!(!validate_amount("", 1.0).is_valid);
        assert!(!validate_amount("ten", 1.0).is_valid);
        assert!(!validate_amount("0", 1.0).is_valid);
        assert!(!validate_amount("-2", 1.0).is_valid);
        assert_eq!(
            validate_amount("2", 1.0).error.as_deref(),
            Some("Insufficient balance")
        );
    }

    #[test]
    fn test_pair_validation() {
        assert!(validate_pair(Some("ETH"), Some("USDC")).is_valid);
        assert!(!validate_pair(None, Some("USDC")).is_valid);
        assert!(!validate_pair(Some("ETH"), None).is_valid);
        assert!(!validate_pair(Some("ETH"), Some("ETH")).is_valid);
    }
}
