//! API Request Handlers

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

use super::middleware::RateLimiter;
use super::types::*;
use crate::core::{convert, CaseMode, ConvertOptions};
use crate::models::config::ApiConfig;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::Currency;
use crate::utils::constants::{APP_VERSION, TOO_LARGE_MARKER};
use crate::utils::xml::to_xml;

const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";
const CONTENT_TYPE_XML: &str = "application/xml; charset=UTF-8";
const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Shared application state
pub struct AppState {
    pub config: ApiConfig,
    pub rate_limiter: Arc<RateLimiter>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.clone()));
        Self {
            config,
            rate_limiter,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    Json(HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

// ============================================
// Terbilang
// ============================================

/// GET/POST /api/terbilang
///
/// Input comes from `?angka=` / `?q=`; a POST with neither falls back to the
/// JSON body. A malformed body is treated as empty input.
pub async fn terbilang(
    method: Method,
    Query(query): Query<TerbilangQuery>,
    body: Bytes,
) -> Response {
    let format = query.response_format();

    let raw = match query.raw_input() {
        Some(raw) => raw.to_string(),
        None if method == Method::POST => body_input(&body),
        None => String::new(),
    };

    let options = ConvertOptions {
        case: CaseMode::from_param(query.case.as_deref()),
        currency: query.currency.as_deref().and_then(Currency::from_param),
    };

    match convert(&raw, &options) {
        Ok(conversion) => {
            debug!(input = %raw, normalized = %conversion.normalized, "Converted");
            render(format, StatusCode::OK, &TerbilangResponse::new(raw, conversion))
        }
        Err(err) => {
            debug!(input = %raw, code = err.code_str(), "Conversion rejected");
            render(format, status_for(&err), &ErrorResponse::from(&err))
        }
    }
}

/// GET /api/terbilang-plain: phrase only, as text/plain
pub async fn terbilang_plain(Query(query): Query<TerbilangQuery>) -> Response {
    let raw = query.raw_input().unwrap_or_default();
    let options = ConvertOptions::default().with_case(CaseMode::from_param(query.case.as_deref()));

    match convert(raw, &options) {
        Ok(conversion) => plain_text(StatusCode::OK, conversion.terbilang),
        Err(err) if err.code == ErrorCode::UnsupportedMagnitude => {
            plain_text(StatusCode::OK, TOO_LARGE_MARKER.to_string())
        }
        Err(err) => {
            debug!(input = %raw, code = err.code_str(), "Plain conversion rejected");
            plain_text(StatusCode::BAD_REQUEST, "Input tidak valid".to_string())
        }
    }
}

// ============================================
// Helper Functions
// ============================================

fn body_input(body: &Bytes) -> String {
    if body.is_empty() {
        return String::new();
    }
    match serde_json::from_slice::<TerbilangBody>(body) {
        Ok(parsed) => parsed.raw_input().unwrap_or_default(),
        Err(e) => {
            debug!(error = %e, "Ignoring unparseable request body");
            String::new()
        }
    }
}

fn status_for(err: &AppError) -> StatusCode {
    StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn encode<T: Serialize>(format: ResponseFormat, payload: &T) -> AppResult<String> {
    match format {
        ResponseFormat::Json => Ok(serde_json::to_string(payload)?),
        ResponseFormat::PrettyJson => Ok(serde_json::to_string_pretty(payload)?),
        ResponseFormat::Xml => to_xml(payload),
    }
}

fn render<T: Serialize>(format: ResponseFormat, status: StatusCode, payload: &T) -> Response {
    let content_type = match format {
        ResponseFormat::Xml => CONTENT_TYPE_XML,
        ResponseFormat::Json | ResponseFormat::PrettyJson => CONTENT_TYPE_JSON,
    };

    match encode(format, payload) {
        Ok(body) => (status, [(header::CONTENT_TYPE, content_type)], body).into_response(),
        Err(err) => {
            error!(code = err.code_str(), "❌ Failed to encode response: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)], body).into_response()
}
