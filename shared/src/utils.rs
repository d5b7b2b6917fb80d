//! # Shared Utility Functions
//!
//! Number formatting used by every front-end that displays prices and balances.
//!
//! ## Functions
//!
//! - [`format_number`] - Fixed decimals with comma separators
//! - [`format_price`] - Up to 4 fraction digits, trailing zeros dropped
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(1645.93), "1,645.93");
//! assert_eq!(format_price(0.20811525), "0.2081");
//! ```

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (formatted.as_str(), ""),
    };

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Format a price with at most 4 fraction digits and no trailing zeros.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(10000.0), "10,000");
/// assert_eq!(format_price(0.5), "0.5");
/// ```
pub fn format_price(value: f64) -> String {
    let formatted = format_number(value, 4);
    match formatted.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int.to_string()
            } else {
                format!("{}.{}", int, frac)
            }
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(-1500.5, 1), "-1,500.5");
    }

    #[test]
    fn test_format_price_trims_trailing_zeros() {
        assert_eq!(format_price(1645.93), "1,645.93");
        assert_eq!(format_price(0.20811525), "0.2081");
        assert_eq!(format_price(26002.82202020202), "26,002.822");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn test_format_price_rounds_to_four_digits() {
        assert_eq!(format_price(0.99999), "1");
        assert_eq!(format_price(0.00005), "0.0001");
    }
}
