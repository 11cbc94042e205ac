//! Number parsing and formatting for form fields

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses the longest numeric prefix of `text`, skipping leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent, so partially typed input such as `"1."` or `"12abc"`
/// still yields a number. Returns `None` when no digits lead the text or
/// the result is not finite.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Renders `value` with exactly two decimals, rounding half away from zero.
pub fn format_2dp(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                "0.00".to_string()
            } else {
                format!("{rounded:.2}")
            }
        }
        // Out of decimal range
        None => format!("{value:.2}"),
    }
}

/// Formats a rate for display with thousands separators and at most three
/// fraction digits, e.g. `500,000` or `1,234.5`.
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && int_part.chars().chain(frac_part.chars()).any(|c| c != '0') {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_float_accepts_numeric_prefixes() {
        assert_eq!(parse_leading_float("1"), Some(1.0));
        assert_eq!(parse_leading_float("1."), Some(1.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("-2.25"), Some(-2.25));
        assert_eq!(parse_leading_float("+3"), Some(3.0));
        assert_eq!(parse_leading_float("  42"), Some(42.0));
        assert_eq!(parse_leading_float("12abc"), Some(12.0));
        assert_eq!(parse_leading_float("1e3"), Some(1000.0));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("2e+"), Some(2.0));
        assert_eq!(parse_leading_float("1.5.5"), Some(1.5));
    }

    #[test]
    fn test_parse_leading_float_rejects_non_numbers() {
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-."), None);
        assert_eq!(parse_leading_float("Infinity"), None);
        assert_eq!(parse_leading_float("1e400"), None);
    }

    #[test]
    fn test_format_2dp() {
        assert_eq!(format_2dp(0.92), "0.92");
        assert_eq!(format_2dp(500_000.0), "500000.00");
        assert_eq!(format_2dp(1.0), "1.00");
        assert_eq!(format_2dp(0.125), "0.13");
        assert_eq!(format_2dp(2.5), "2.50");
        assert_eq!(format_2dp(1.004), "1.00");
        assert_eq!(format_2dp(1.006), "1.01");
        assert_eq!(format_2dp(-0.0), "0.00");
        assert_eq!(format_2dp(0.000_001), "0.00");
    }

    #[test]
    fn test_format_2dp_large_values() {
        assert_eq!(format_2dp(1.0e12), "1000000000000.00");
        assert_eq!(format_2dp(1.0e30), format!("{:.2}", 1.0e30));
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(500_000.0), "500,000");
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1_234.5), "1,234.5");
        assert_eq!(format_grouped(0.1234), "0.123");
        assert_eq!(format_grouped(-42_000.0), "-42,000");
    }
}
