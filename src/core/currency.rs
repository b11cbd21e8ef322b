//! Rupiah Formatter
//!
//! Renders a canonical number as "<integer> rupiah [<sen> sen]".
//! The fraction is rounded half-up to two digits (sen). When rounding
//! reaches 100 sen the integer part is incremented; this works on the
//! digit string directly so integers of any length carry correctly.

use crate::core::words::integer_to_words;
use crate::models::errors::AppResult;
use crate::models::types::{CanonicalNumber, CurrencyResult};
use crate::utils::constants::{WORD_NEGATIVE, WORD_RUPIAH, WORD_SEN};

/// Rupiah phrase for a number. The sign comes from the input, carry only
/// changes the magnitude.
pub fn to_rupiah(number: &CanonicalNumber) -> AppResult<CurrencyResult> {
    let mut integer = number.integer.clone();
    let mut sen = round_to_sen(&number.fraction);
    if sen == 100 {
        sen = 0;
        integer = increment_digits(&integer);
    }

    let mut main = integer_to_words(&integer)?;
    if number.is_negative() {
        main = format!("{} {}", WORD_NEGATIVE, main);
    }
    let mut main_words = format!("{} {}", main, WORD_RUPIAH);

    let sen_words = if sen > 0 {
        integer_to_words(&sen.to_string())?
    } else {
        String::new()
    };
    if !sen_words.is_empty() {
        main_words = format!("{} {} {}", main_words, sen_words, WORD_SEN);
    }

    Ok(CurrencyResult {
        main_words,
        sen,
        sen_words,
    })
}

/// `0.<fraction> * 100` rounded half-up, in 0..=100.
///
/// Works on the decimal digits, so "0.285" gives 29 (binary floating
/// point would give 28).
pub fn round_to_sen(fraction: &str) -> u8 {
    let digit = |i: usize| -> u8 {
        fraction
            .as_bytes()
            .get(i)
            .filter(|b| b.is_ascii_digit())
            .map(|b| b - b'0')
            .unwrap_or(0)
    };
    let cents = digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        cents + 1
    } else {
        cents
    }
}

/// Add one to an unsigned decimal digit string of any length.
/// "999" -> "1000", "" -> "1".
pub fn increment_digits(digits: &str) -> String {
    let mut bytes: Vec<u8> = digits.bytes().collect();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            // only ASCII digits were touched
            return String::from_utf8(bytes).unwrap_or_default();
        }
    }
    let mut out = String::with_capacity(bytes.len() + 1);
    out.push('1');
    out.extend(bytes.into_iter().map(char::from));
    out
}
