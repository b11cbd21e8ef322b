//! Terbilang Library
//!
//! Converts loosely formatted number strings into Indonesian words:
//! - Separator disambiguation ("1.234,56" vs "1,234.56")
//! - Terbilang up to 999 kuintiliun, fractions read digit by digit
//! - Rupiah/sen rendering with half-up rounding and carry
//! - Output casing (lower, upper, title, sentence)
//!
//! The `api` module exposes the same engine over HTTP.

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{
    convert, fraction_to_words, integer_to_words, make_terbilang, normalize,
    three_digits_to_words, to_rupiah, CaseMode, ConvertOptions,
};
pub use models::{
    ApiConfig, AppError, AppResult, CanonicalNumber, Conversion, Currency, CurrencyResult,
    ErrorCode, RateLimitConfig, Sign, WordsResult,
};
