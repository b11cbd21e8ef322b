//! Core Module - Number Narration Engine
//!
//! Otak aplikasi: normalisasi string angka, konversi ke kata (terbilang),
//! dan format Rupiah. Semua fungsi murni, tanpa I/O dan tanpa state.

pub mod case;
pub mod currency;
pub mod normalizer;
pub mod words;

pub use case::CaseMode;
pub use currency::{increment_digits, round_to_sen, to_rupiah};
pub use normalizer::normalize;
pub use words::{fraction_to_words, integer_to_words, make_terbilang, three_digits_to_words};

use crate::models::errors::AppResult;
use crate::models::types::{Conversion, Currency};
use crate::utils::constants::WORD_SEN;

/// Options for a single conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub case: CaseMode,
    pub currency: Option<Currency>,
}

impl ConvertOptions {
    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }
}

/// raw input -> normalize -> words (+ rupiah) -> case transform
pub fn convert(raw: &str, options: &ConvertOptions) -> AppResult<Conversion> {
    let number = normalize(raw)?;
    let words = make_terbilang(&number)?;

    let mut conversion = Conversion {
        normalized: number.to_string(),
        negative: words.negative,
        integer: number.integer.clone(),
        fraction: number.fraction.clone(),
        terbilang: options.case.apply(&words.words),
        terbilang_idr: None,
        sen: None,
        sen_terbilang: None,
    };

    if let Some(Currency::Idr) = options.currency {
        let rupiah = to_rupiah(&number)?;
        conversion.terbilang_idr = Some(options.case.apply(&rupiah.main_words));
        if rupiah.sen > 0 {
            conversion.sen = Some(rupiah.sen);
            conversion.sen_terbilang =
                Some(options.case.apply(&format!("{} {}", rupiah.sen_words, WORD_SEN)));
        }
    }

    Ok(conversion)
}
