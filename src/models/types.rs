//! Core data types for number narration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Leading sign as written by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    Plus,
    Minus,
    #[default]
    None,
}

impl Sign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
            Sign::None => "",
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Sign::Minus)
    }
}

/// A number with its separators resolved.
///
/// Both digit fields contain ASCII digits only. `integer` is never empty;
/// `fraction` is empty when the input had no decimal part. Leading zeros
/// are kept as written ("007" stays "007").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalNumber {
    pub sign: Sign,
    pub integer: String,
    pub fraction: String,
}

impl CanonicalNumber {
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    pub fn has_fraction(&self) -> bool {
        !self.fraction.is_empty()
    }
}

/// Canonical string form: `sign + integer [ "." + fraction ]`
impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.as_str(), self.integer)?;
        if self.has_fraction() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

/// Words for a full number, before any case transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsResult {
    pub words: String,
    pub negative: bool,
}

/// Rupiah rendering of a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyResult {
    /// Full phrase, e.g. "seribu rupiah lima puluh sen"
    pub main_words: String,
    /// Rounded cents, 0..=99 after carry
    pub sen: u8,
    /// Words for `sen` alone, empty when `sen == 0`
    pub sen_words: String,
}

/// Supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Idr,
}

impl Currency {
    /// Lenient parsing for query parameters: "idr" and "rupiah", any case.
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "idr" | "rupiah" => Some(Currency::Idr),
            _ => None,
        }
    }
}

/// Result of a full conversion, case transform already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub normalized: String,
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
    pub terbilang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terbilang_idr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sen: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sen_terbilang: Option<String>,
}
