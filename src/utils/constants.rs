//! Constants Module - Single Source of Truth
//!
//! Semua tabel kata, batas, dan default konfigurasi yang dipakai
//! di seluruh aplikasi didefinisikan di sini.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "Terbilang API";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// WORD TABLES
// ============================================

/// Kata dasar 0..=11. Index 12+ dibentuk lewat aturan "belas"/"puluh"/"ratus".
pub const WORDS_0_11: [&str; 12] = [
    "nol", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
    "sepuluh", "sebelas",
];

/// Scale words per 3-digit chunk, index 0 = satuan/ratusan.
pub const SCALES: [&str; 7] = [
    "",
    "ribu",
    "juta",
    "miliar",
    "triliun",
    "kuadriliun",
    "kuintiliun",
];

/// Largest supported integer part: 999 kuintiliun (21 significant digits).
pub const MAX_INTEGER_DIGITS: usize = SCALES.len() * 3;

/// A lone separator is read as decimal only with 1..=6 digits after it.
pub const MAX_HEURISTIC_FRACTION_DIGITS: usize = 6;

// ============================================
// PHRASE FRAGMENTS
// ============================================

pub const WORD_NEGATIVE: &str = "minus";
pub const WORD_DECIMAL_POINT: &str = "koma";
pub const WORD_RUPIAH: &str = "rupiah";
pub const WORD_SEN: &str = "sen";

/// Marker the legacy plain-text endpoint returns for out-of-range numbers
pub const TOO_LARGE_MARKER: &str = "(terlalu besar)";

/// Hint attached to every failed conversion response
pub const INPUT_HINT: &str = "Kirim parameter ?angka=1234 atau body JSON {\"angka\":\"1.234,56\"}";

// ============================================
// SERVER DEFAULTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Requests per rate-limit window (0 = disabled)
pub const DEFAULT_RATE_LIMIT: u32 = 100;
pub const DEFAULT_RATE_WINDOW_SECS: u64 = 60;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// 16 KiB is plenty for `{"angka": "..."}`
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

/// Interval for purging stale rate-limit entries
pub const RATE_LIMIT_CLEANUP_SECS: u64 = 60;
