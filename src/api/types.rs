//! API Request/Response Types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::errors::AppError;
use crate::models::types::Conversion;
use crate::utils::constants::INPUT_HINT;

// ============================================
// Requests
// ============================================

/// Query string for `/api/terbilang` and `/api/terbilang-plain`
#[derive(Debug, Default, Deserialize)]
pub struct TerbilangQuery {
    pub angka: Option<String>,
    pub q: Option<String>,
    pub case: Option<String>,
    pub currency: Option<String>,
    pub format: Option<String>,
    /// Presence alone enables pretty JSON (`?pretty`)
    pub pretty: Option<String>,
}

impl TerbilangQuery {
    /// `angka` wins over `q` whenever it is present, even if empty.
    /// An empty result counts as absent.
    pub fn raw_input(&self) -> Option<&str> {
        self.angka
            .as_deref()
            .or(self.q.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn response_format(&self) -> ResponseFormat {
        let format = self
            .format
            .as_deref()
            .map(|f| f.trim().to_lowercase())
            .unwrap_or_default();
        match format.as_str() {
            "xml" => ResponseFormat::Xml,
            "pretty" => ResponseFormat::PrettyJson,
            _ if self.pretty.is_some() => ResponseFormat::PrettyJson,
            _ => ResponseFormat::Json,
        }
    }
}

/// POST body. Numbers are accepted as well as strings: `{"angka": 1000.25}`
#[derive(Debug, Default, Deserialize)]
pub struct TerbilangBody {
    pub angka: Option<Value>,
    pub q: Option<Value>,
}

impl TerbilangBody {
    pub fn raw_input(&self) -> Option<String> {
        [self.angka.as_ref(), self.q.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(value_as_input)
            .find(|s| !s.is_empty())
    }
}

fn value_as_input(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    PrettyJson,
    Xml,
}

// ============================================
// Responses
// ============================================

/// Successful conversion
#[derive(Debug, Serialize)]
pub struct TerbilangResponse {
    pub ok: bool,
    pub input: String,
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

impl TerbilangResponse {
    pub fn new(input: impl Into<String>, conversion: Conversion) -> Self {
        Self {
            ok: true,
            input: input.into(),
            normalized: conversion.normalized,
            negative: conversion.negative,
            integer: conversion.integer,
            fraction: conversion.fraction,
            terbilang: conversion.terbilang,
            terbilang_idr: conversion.terbilang_idr,
            sen: conversion.sen,
            sen_terbilang: conversion.sen_terbilang,
        }
    }
}

/// Failed conversion
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    /// Stable code, e.g. "INVALID_INTEGER_PART"
    pub error: String,
    pub detail: String,
    pub hint: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            ok: false,
            error: err.code_str().to_string(),
            detail: err.message.clone(),
            hint: INPUT_HINT.to_string(),
        }
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}
