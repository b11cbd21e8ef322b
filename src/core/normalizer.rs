//! Number String Normalizer
//!
//! Turns a loosely formatted number ("1.234,56", "-1,234.56", " 12 500 ")
//! into a `CanonicalNumber` with the decimal separator resolved.
//!
//! Separator policy:
//! - Both `,` and `.` present: the one that appears rightmost is the
//!   decimal separator, every occurrence of the other is dropped.
//! - Only one kind present: it is a decimal separator when it occurs once
//!   and is followed by 1..=6 characters, otherwise all occurrences are
//!   thousands separators.
//!
//! The single-separator rule is a heuristic: "1.234" is read as
//! "satu koma dua tiga empat", not as a grouped thousand.

use tracing::debug;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{CanonicalNumber, Sign};
use crate::utils::constants::MAX_HEURISTIC_FRACTION_DIGITS;

/// Parse a raw number string.
pub fn normalize(raw: &str) -> AppResult<CanonicalNumber> {
    let trimmed = raw.trim_matches(is_blank);
    if trimmed.is_empty() {
        return Err(AppError::empty_input());
    }

    // Internal spaces (incl. NBSP) are digit-group spacing, drop them too
    let compact: String = trimmed.chars().filter(|&c| !is_blank(c)).collect();

    let (sign, body) = split_sign(&compact);
    let (integer, fraction) = split_separators(body);

    if !is_digits(&integer) {
        debug!(input = %raw, "rejected integer part");
        return Err(AppError::invalid_integer_part(&integer));
    }
    if !fraction.is_empty() && !is_digits(&fraction) {
        debug!(input = %raw, "rejected fraction part");
        return Err(AppError::invalid_fraction_part(&fraction));
    }

    Ok(CanonicalNumber {
        sign,
        integer,
        fraction,
    })
}

/// Unicode whitespace plus the byte order mark, which pasted text often carries
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn split_sign(s: &str) -> (Sign, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (Sign::Minus, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (Sign::Plus, rest)
    } else {
        (Sign::None, s)
    }
}

/// Returns (integer part, fraction part); fraction may be empty.
fn split_separators(s: &str) -> (String, String) {
    match (s.rfind(','), s.rfind('.')) {
        (Some(comma), Some(dot)) => {
            let (decimal, thousands) = if comma > dot { (',', '.') } else { ('.', ',') };
            let mut parts = s.split(decimal);
            let integer = parts.next().unwrap_or_default().replace(thousands, "");
            // Anything after a repeated decimal separator is folded into the fraction
            let fraction: String = parts.collect();
            (integer, fraction)
        }
        (Some(_), None) => split_single_separator(s, ','),
        (None, Some(_)) => split_single_separator(s, '.'),
        (None, None) => (s.to_string(), String::new()),
    }
}

fn split_single_separator(s: &str, sep: char) -> (String, String) {
    let parts: Vec<&str> = s.split(sep).collect();
    if let [integer, fraction] = parts.as_slice() {
        let len = fraction.chars().count();
        if (1..=MAX_HEURISTIC_FRACTION_DIGITS).contains(&len) {
            return (integer.to_string(), fraction.to_string());
        }
    }
    (s.replace(sep, ""), String::new())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    fn canonical(raw: &str) -> String {
        normalize(raw).unwrap().to_string()
    }

    fn error_code(raw: &str) -> ErrorCode {
        normalize(raw).unwrap_err().code
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        assert_eq!(canonical("\u{FEFF}123"), "123");
        assert_eq!(canonical("1\u{FEFF}000,5"), "1000.5");
        assert_eq!(error_code("\u{FEFF}"), ErrorCode::EmptyInput);
    }

    #[test]
    fn test_rightmost_separator_is_decimal() {
        assert_eq!(canonical("1.234,56"), "1234.56");
        assert_eq!(canonical("1,234.56"), "1234.56");
        assert_eq!(canonical("1.234.567,89"), "1234567.89");
        assert_eq!(canonical("1,234,567.89"), "1234567.89");
    }

    #[test]
    fn test_combined_branch_does_not_cap_fraction() {
        assert_eq!(canonical("1.000,12345678"), "1000.12345678");
        // repeated decimal separators fold into the fraction
        assert_eq!(canonical("1.234,5,6"), "1234.56");
    }

    #[test]
    fn test_single_separator_heuristic() {
        assert_eq!(canonical("1,5"), "1.5");
        assert_eq!(canonical("12500.75"), "12500.75");
        assert_eq!(canonical("1.234"), "1.234");
        assert_eq!(canonical("0,123456"), "0.123456");
        // 7 digits after the separator: thousands
        assert_eq!(canonical("1,2345678"), "12345678");
        // repeated separator: thousands
        assert_eq!(canonical("1.234.567"), "1234567");
        assert_eq!(canonical("1,234,567"), "1234567");
        // nothing after the separator: thousands
        assert_eq!(canonical("1000."), "1000");
    }

    #[test]
    fn test_sign_and_whitespace() {
        assert_eq!(canonical("-2001"), "-2001");
        assert_eq!(canonical("+42"), "+42");
        assert_eq!(canonical("  \u{00A0}12 500\t"), "12500");
        assert_eq!(canonical("- 5"), "-5");
        assert!(normalize("-7").unwrap().is_negative());
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let n = normalize("007,50").unwrap();
        assert_eq!(n.integer, "007");
        assert_eq!(n.fraction, "50");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(error_code(""), ErrorCode::EmptyInput);
        assert_eq!(error_code("   "), ErrorCode::EmptyInput);
        assert_eq!(error_code("\u{00A0}"), ErrorCode::EmptyInput);
    }

    #[test]
    fn test_invalid_integer_part() {
        assert_eq!(error_code("12a3"), ErrorCode::InvalidIntegerPart);
        assert_eq!(error_code("-"), ErrorCode::InvalidIntegerPart);
        assert_eq!(error_code(",5"), ErrorCode::InvalidIntegerPart);
        assert_eq!(error_code("--5"), ErrorCode::InvalidIntegerPart);
        assert_eq!(error_code("١٢٣"), ErrorCode::InvalidIntegerPart);
    }

    #[test]
    fn test_invalid_fraction_part() {
        assert_eq!(error_code("12.3x"), ErrorCode::InvalidFractionPart);
        assert_eq!(error_code("1,234.5,6"), ErrorCode::InvalidFractionPart);
    }
}
