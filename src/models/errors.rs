//! Centralized Error Handling Module
//!
//! Setiap kegagalan memiliki kode error yang unik dan stabil, supaya
//! client bisa membedakan jenis input yang ditolak tanpa parsing pesan.
//!
//! Error codes:
//! - Parse errors: EMPTY_INPUT, INVALID_INTEGER_PART, INVALID_FRACTION_PART
//! - Range errors: UNSUPPORTED_MAGNITUDE
//! - API_xxx: API errors (rate limiting, response encoding)
//! - CFG_xxx: Configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// True for errors caused by the caller's number string
    pub fn is_input_error(&self) -> bool {
        self.code.is_input_error()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // ============================================
    // Parse Errors
    // ============================================
    /// Input kosong setelah trim
    EmptyInput,
    /// Bagian bulat mengandung karakter non-digit
    InvalidIntegerPart,
    /// Bagian pecahan mengandung karakter non-digit
    InvalidFractionPart,

    // ============================================
    // Range Errors
    // ============================================
    /// Integer part exceeds the largest scale word (kuintiliun)
    UnsupportedMagnitude,

    // ============================================
    // API Errors
    // ============================================
    /// Rate limit exceeded
    ApiRateLimited,
    /// Internal server error
    ApiInternalError,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::InvalidIntegerPart => "INVALID_INTEGER_PART",
            Self::InvalidFractionPart => "INVALID_FRACTION_PART",

            Self::UnsupportedMagnitude => "UNSUPPORTED_MAGNITUDE",

            Self::ApiRateLimited => "API_RATE_LIMITED",
            Self::ApiInternalError => "API_INTERNAL_ERROR",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::EmptyInput
            | Self::InvalidIntegerPart
            | Self::InvalidFractionPart
            | Self::UnsupportedMagnitude => 400,
            Self::ApiRateLimited => 429,
            _ => 500,
        }
    }

    /// Errors caused by the number string itself
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::InvalidIntegerPart
                | Self::InvalidFractionPart
                | Self::UnsupportedMagnitude
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Input kosong
    pub fn empty_input() -> Self {
        Self::new(ErrorCode::EmptyInput, "Input is empty")
    }

    /// Integer part is not made of digits only
    pub fn invalid_integer_part(part: &str) -> Self {
        Self::new(
            ErrorCode::InvalidIntegerPart,
            format!("Integer part {:?} must contain digits only", part),
        )
    }

    /// Fraction part is not made of digits only
    pub fn invalid_fraction_part(part: &str) -> Self {
        Self::new(
            ErrorCode::InvalidFractionPart,
            format!("Fraction part {:?} must contain digits only", part),
        )
    }

    /// Integer part beyond kuintiliun
    pub fn unsupported_magnitude(significant_digits: usize, max_digits: usize) -> Self {
        Self::new(
            ErrorCode::UnsupportedMagnitude,
            format!(
                "Integer part has {} significant digits, at most {} are supported",
                significant_digits, max_digits
            ),
        )
    }

    /// Client exhausted its request window
    pub fn rate_limited(reset_secs: u64) -> Self {
        Self::new(
            ErrorCode::ApiRateLimited,
            format!("Too many requests, retry in {}s", reset_secs),
        )
    }

    /// Invalid configuration value
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: {:?}", key, value),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ApiInternalError, "JSON encode error", err)
    }
}
