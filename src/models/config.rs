//! Runtime configuration for the API server
//!
//! Semua nilai dibaca dari environment variable dengan default dari
//! `utils/constants.rs`. Nilai yang tidak valid ditolak saat startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, DEFAULT_RATE_LIMIT,
    DEFAULT_RATE_WINDOW_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Rate limiter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests per window, 0 disables limiting
    pub requests_per_window: u32,
    /// Window duration
    pub window_duration: Duration,
    /// Key clients by X-Forwarded-For / X-Real-IP instead of the peer
    /// address. Only safe behind a proxy that overwrites those headers.
    pub trust_proxy_headers: bool,
}

impl RateLimitConfig {
    pub fn is_enabled(&self) -> bool {
        self.requests_per_window > 0
    }

    pub fn disabled() -> Self {
        Self {
            requests_per_window: 0,
            ..Self::default()
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: DEFAULT_RATE_LIMIT,
            window_duration: Duration::from_secs(DEFAULT_RATE_WINDOW_SECS),
            trust_proxy_headers: false,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub rate_limit: RateLimitConfig,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rate_limit: RateLimitConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Load from process environment.
    ///
    /// Environment:
    ///   PORT / TERBILANG_PORT           - Server port (default: 8080)
    ///   TERBILANG_HOST                  - Bind host (default: 0.0.0.0)
    ///   TERBILANG_RATE_LIMIT            - Requests per window, 0 = off (default: 100)
    ///   TERBILANG_RATE_WINDOW_SECS      - Window length (default: 60)
    ///   TERBILANG_TRUST_PROXY           - Key rate limits by proxy headers (default: false)
    ///   TERBILANG_REQUEST_TIMEOUT_SECS  - Per-request timeout (default: 10)
    ///   TERBILANG_MAX_BODY_BYTES        - Request body limit (default: 16384)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("TERBILANG_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        // Platform hosts (Railway, Koyeb) inject PORT; TERBILANG_PORT for local dev
        let port = match lookup("PORT").or_else(|| lookup("TERBILANG_PORT")) {
            Some(raw) => parse_value("PORT", &raw)?,
            None => defaults.port,
        };

        let requests_per_window = parse_or("TERBILANG_RATE_LIMIT", &lookup, DEFAULT_RATE_LIMIT)?;
        let window_secs = parse_or(
            "TERBILANG_RATE_WINDOW_SECS",
            &lookup,
            DEFAULT_RATE_WINDOW_SECS,
        )?;
        if window_secs == 0 {
            return Err(AppError::invalid_config("TERBILANG_RATE_WINDOW_SECS", "0"));
        }

        let trust_proxy_headers = parse_or("TERBILANG_TRUST_PROXY", &lookup, false)?;

        let timeout_secs = parse_or(
            "TERBILANG_REQUEST_TIMEOUT_SECS",
            &lookup,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(AppError::invalid_config(
                "TERBILANG_REQUEST_TIMEOUT_SECS",
                "0",
            ));
        }

        let max_body_bytes = parse_or("TERBILANG_MAX_BODY_BYTES", &lookup, DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self {
            host,
            port,
            rate_limit: RateLimitConfig {
                requests_per_window,
                window_duration: Duration::from_secs(window_secs),
                trust_proxy_headers,
            },
            request_timeout: Duration::from_secs(timeout_secs),
            max_body_bytes,
        })
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| AppError::invalid_config("TERBILANG_HOST", &self.host))
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_config(key, raw))
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> AppResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_port_precedence() {
        let config =
            ApiConfig::from_lookup(lookup_from(&[("PORT", "9000"), ("TERBILANG_PORT", "7000")]))
                .unwrap();
        assert_eq!(config.port, 9000);

        let config = ApiConfig::from_lookup(lookup_from(&[("TERBILANG_PORT", "7000")])).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_rate_limit_can_be_disabled() {
        let config = ApiConfig::from_lookup(lookup_from(&[("TERBILANG_RATE_LIMIT", "0")])).unwrap();
        assert!(!config.rate_limit.is_enabled());
    }

    #[test]
    fn test_trust_proxy_flag() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(!config.rate_limit.trust_proxy_headers);

        let config =
            ApiConfig::from_lookup(lookup_from(&[("TERBILANG_TRUST_PROXY", "true")])).unwrap();
        assert!(config.rate_limit.trust_proxy_headers);

        let err = ApiConfig::from_lookup(lookup_from(&[("TERBILANG_TRUST_PROXY", "yes")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ApiConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);

        let err = ApiConfig::from_lookup(lookup_from(&[("TERBILANG_REQUEST_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }
}
