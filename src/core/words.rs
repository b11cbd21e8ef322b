//! Indonesian Number Words (terbilang)
//!
//! Aturan bahasa:
//! - 1..=11 dari tabel dasar (sepuluh, sebelas tidak beraturan)
//! - 12..=19: "<satuan> belas"
//! - 20..=99: "<puluhan> puluh [<satuan>]"
//! - 100..=199: "seratus [...]", 200..=999: "<ratusan> ratus [...]"
//! - 1000..=1999 chunk: "seribu", bukan "satu ribu"
//!
//! Integers are rendered in 3-digit chunks from the right, each followed by
//! its scale word from `SCALES`. Fractions are read digit by digit.

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{CanonicalNumber, WordsResult};
use crate::utils::constants::{
    MAX_INTEGER_DIGITS, SCALES, WORDS_0_11, WORD_DECIMAL_POINT, WORD_NEGATIVE,
};

/// Words for 0..=999. Zero yields an empty string, callers decide how to
/// render an all-zero number.
///
/// # Panics
///
/// Panics if `n` is 1000 or more.
pub fn three_digits_to_words(n: u16) -> String {
    assert!(n < 1000, "chunk out of range: {}", n);
    match n {
        0 => String::new(),
        1..=11 => WORDS_0_11[n as usize].to_string(),
        12..=19 => format!("{} belas", WORDS_0_11[(n - 10) as usize]),
        20..=99 => {
            let tens = WORDS_0_11[(n / 10) as usize];
            match n % 10 {
                0 => format!("{} puluh", tens),
                ones => format!("{} puluh {}", tens, WORDS_0_11[ones as usize]),
            }
        }
        100..=199 => match n - 100 {
            0 => "seratus".to_string(),
            rest => format!("seratus {}", three_digits_to_words(rest)),
        },
        _ => {
            let head = format!("{} ratus", WORDS_0_11[(n / 100) as usize]);
            match n % 100 {
                0 => head,
                rest => format!("{} {}", head, three_digits_to_words(rest)),
            }
        }
    }
}

/// Words for an unsigned digit string. Empty or all-zero input is "nol".
///
/// Fails with `UNSUPPORTED_MAGNITUDE` when the value needs a scale word
/// beyond "kuintiliun" (more than 21 significant digits).
pub fn integer_to_words(digits: &str) -> AppResult<String> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(WORDS_0_11[0].to_string());
    }
    if !significant.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_integer_part(digits));
    }
    if significant.len() > MAX_INTEGER_DIGITS {
        return Err(AppError::unsupported_magnitude(
            significant.len(),
            MAX_INTEGER_DIGITS,
        ));
    }

    let mut parts: Vec<String> = Vec::with_capacity(SCALES.len());
    for (scale_index, chunk) in chunks_from_right(significant).into_iter().enumerate().rev() {
        match (scale_index, chunk) {
            (_, 0) => continue,
            (1, 1) => parts.push("seribu".to_string()),
            (0, _) => parts.push(three_digits_to_words(chunk)),
            (_, _) => parts.push(format!(
                "{} {}",
                three_digits_to_words(chunk),
                SCALES[scale_index]
            )),
        }
    }

    Ok(collapse_whitespace(&parts.join(" ")))
}

/// Digit-by-digit reading: "56" is "lima enam", never "lima puluh enam".
pub fn fraction_to_words(digits: &str) -> String {
    let words: Vec<&str> = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| WORDS_0_11[d as usize])
        .collect();
    words.join(" ")
}

/// Full phrase for a canonical number: "[minus ]<integer>[ koma <fraction>]"
pub fn make_terbilang(number: &CanonicalNumber) -> AppResult<WordsResult> {
    let mut words = integer_to_words(&number.integer)?;

    if number.has_fraction() {
        let fraction_words = fraction_to_words(&number.fraction);
        if !fraction_words.is_empty() {
            words = format!("{} {} {}", words, WORD_DECIMAL_POINT, fraction_words);
        }
    }

    let negative = number.is_negative();
    if negative {
        words = format!("{} {}", WORD_NEGATIVE, words);
    }

    Ok(WordsResult { words, negative })
}

/// Split into 3-digit chunk values, least significant first.
/// Caller guarantees ASCII digits with at most 21 of them.
fn chunks_from_right(digits: &str) -> Vec<u16> {
    let bytes = digits.as_bytes();
    let mut chunks = Vec::with_capacity(bytes.len() / 3 + 1);
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        let value = bytes[start..end]
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        chunks.push(value);
        end = start;
    }
    chunks
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::normalize;
    use crate::models::errors::ErrorCode;

    fn words(digits: &str) -> String {
        integer_to_words(digits).unwrap()
    }

    #[test]
    #[should_panic(expected = "chunk out of range")]
    fn test_three_digits_rejects_out_of_range() {
        three_digits_to_words(1200);
    }

    #[test]
    fn test_three_digits() {
        assert_eq!(three_digits_to_words(0), "");
        assert_eq!(three_digits_to_words(1), "satu");
        assert_eq!(three_digits_to_words(10), "sepuluh");
        assert_eq!(three_digits_to_words(11), "sebelas");
        assert_eq!(three_digits_to_words(12), "dua belas");
        assert_eq!(three_digits_to_words(19), "sembilan belas");
        assert_eq!(three_digits_to_words(20), "dua puluh");
        assert_eq!(three_digits_to_words(45), "empat puluh lima");
        assert_eq!(three_digits_to_words(100), "seratus");
        assert_eq!(three_digits_to_words(101), "seratus satu");
        assert_eq!(three_digits_to_words(111), "seratus sebelas");
        assert_eq!(three_digits_to_words(200), "dua ratus");
        assert_eq!(three_digits_to_words(999), "sembilan ratus sembilan puluh sembilan");
    }

    #[test]
    fn test_zero() {
        assert_eq!(words("0"), "nol");
        assert_eq!(words("000"), "nol");
        assert_eq!(words(""), "nol");
    }

    #[test]
    fn test_seribu_rule() {
        assert_eq!(words("1000"), "seribu");
        assert_eq!(words("1001"), "seribu satu");
        assert_eq!(words("2000"), "dua ribu");
        assert_eq!(words("11000"), "sebelas ribu");
        assert_eq!(words("101000"), "seratus satu ribu");
        // only the thousands chunk gets the "se-" prefix
        assert_eq!(words("1000000"), "satu juta");
        assert_eq!(words("1001000"), "satu juta seribu");
    }

    #[test]
    fn test_scales() {
        assert_eq!(
            words("1234567"),
            "satu juta dua ratus tiga puluh empat ribu lima ratus enam puluh tujuh"
        );
        assert_eq!(words("1000000000"), "satu miliar");
        assert_eq!(words("2000000000000"), "dua triliun");
        assert_eq!(words("3000000000000000"), "tiga kuadriliun");
        assert_eq!(words("4000000000000000000"), "empat kuintiliun");
        assert_eq!(words("1000000001"), "satu miliar satu");
        assert_eq!(words("0012"), "dua belas");
    }

    #[test]
    fn test_magnitude_bound() {
        let max = "9".repeat(21);
        assert!(words(&max).starts_with("sembilan ratus sembilan puluh sembilan kuintiliun"));

        let too_big = format!("1{}", "0".repeat(21));
        let err = integer_to_words(&too_big).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedMagnitude);

        // leading zeros do not count
        let padded = format!("{}1", "0".repeat(30));
        assert_eq!(words(&padded), "satu");
    }

    #[test]
    fn test_fraction_digit_by_digit() {
        assert_eq!(fraction_to_words("56"), "lima enam");
        assert_eq!(fraction_to_words("05"), "nol lima");
        assert_eq!(fraction_to_words(""), "");
    }

    #[test]
    fn test_make_terbilang() {
        let result = make_terbilang(&normalize("-2001").unwrap()).unwrap();
        assert_eq!(result.words, "minus dua ribu satu");
        assert!(result.negative);

        let result = make_terbilang(&normalize("1.234,56").unwrap()).unwrap();
        assert_eq!(result.words, "seribu dua ratus tiga puluh empat koma lima enam");
        assert!(!result.negative);

        let result = make_terbilang(&normalize("+0,5").unwrap()).unwrap();
        assert_eq!(result.words, "nol koma lima");
    }
}
