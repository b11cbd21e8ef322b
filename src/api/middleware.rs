//! API Middleware (Rate Limiting, Logging)

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::handlers::AppState;
use super::types::ErrorResponse;
use crate::models::config::RateLimitConfig;
use crate::models::errors::AppError;
use crate::utils::constants::RATE_LIMIT_CLEANUP_SECS;

/// Outcome of a rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_secs: u64,
}

/// In-memory fixed-window rate limiter, keyed by client IP.
/// Only used for request throttling; conversions themselves are stateless.
pub struct RateLimiter {
    /// Request counts per client: (count, window start)
    requests: DashMap<String, (u32, Instant)>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            requests: DashMap::new(),
            config,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Check and count one request for `key`
    pub fn check(&self, key: &str) -> RateDecision {
        let now = Instant::now();

        let mut entry = self.requests.entry(key.to_string()).or_insert((0, now));

        // Reset window if expired
        if now.duration_since(entry.1) > self.config.window_duration {
            entry.0 = 0;
            entry.1 = now;
        }

        let reset_secs = self
            .config
            .window_duration
            .saturating_sub(now.duration_since(entry.1))
            .as_secs();

        if entry.0 >= self.config.requests_per_window {
            return RateDecision {
                allowed: false,
                remaining: 0,
                reset_secs,
            };
        }

        entry.0 += 1;
        RateDecision {
            allowed: true,
            remaining: self.config.requests_per_window - entry.0,
            reset_secs,
        }
    }

    /// Drop entries idle for more than two windows. Returns removed count.
    pub fn cleanup(&self) -> usize {
        let now = Instant::now();
        let before = self.requests.len();
        let max_idle = self.config.window_duration * 2;
        self.requests
            .retain(|_, (_, started)| now.duration_since(*started) < max_idle);
        before.saturating_sub(self.requests.len())
    }

    pub fn tracked_clients(&self) -> usize {
        self.requests.len()
    }
}

/// Periodically purge stale rate-limit entries
pub fn start_cleanup_task(limiter: Arc<RateLimiter>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(RATE_LIMIT_CLEANUP_SECS));
        loop {
            interval.tick().await;
            let removed = limiter.cleanup();
            if removed > 0 {
                debug!(removed, "🧹 Rate limiter cleanup");
            }
        }
    })
}

fn is_health_path(path: &str) -> bool {
    path == "/health" || path == "/v1/health"
}

/// First X-Forwarded-For hop, then X-Real-IP
fn forwarded_client(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}

/// Rate-limit key. Proxy headers are client-controlled, so they are only
/// consulted when `trust_proxy` is set; otherwise the peer IP is used.
fn client_key(headers: &HeaderMap, peer: Option<IpAddr>, trust_proxy: bool) -> String {
    if trust_proxy {
        if let Some(forwarded) = forwarded_client(headers) {
            return forwarded;
        }
    }
    peer.map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn set_rate_headers(response: &mut Response, decision: RateDecision) {
    let headers = response.headers_mut();
    headers.insert("X-RateLimit-Remaining", HeaderValue::from(decision.remaining));
    headers.insert("X-RateLimit-Reset", HeaderValue::from(decision.reset_secs));
}

/// Rate limiting middleware
///
/// The peer address comes from `ConnectInfo`, so the server must be run
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub async fn rate_limit_middleware(
    State(state): State<Arc<AppState>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    if !state.rate_limiter.is_enabled() || is_health_path(request.uri().path()) {
        return next.run(request).await;
    }

    let peer = connect_info.map(|ConnectInfo(addr)| addr.ip());
    let key = client_key(&headers, peer, state.config.rate_limit.trust_proxy_headers);
    let decision = state.rate_limiter.check(&key);

    if !decision.allowed {
        warn!(key = %key, "Rate limit exceeded");
        let err = AppError::rate_limited(decision.reset_secs);
        let status = StatusCode::from_u16(err.code.http_status())
            .unwrap_or(StatusCode::TOO_MANY_REQUESTS);
        let mut response = (status, Json(ErrorResponse::from(&err))).into_response();
        set_rate_headers(&mut response, decision);
        return response;
    }

    let mut response = next.run(request).await;
    set_rate_headers(&mut response, decision);
    response
}

/// Request logging middleware
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        latency_ms = %latency.as_millis(),
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(limit: u32) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            requests_per_window: limit,
            window_duration: Duration::from_secs(60),
            trust_proxy_headers: false,
        })
    }

    #[test]
    fn test_limit_per_key() {
        let limiter = limiter(2);
        assert_eq!(limiter.check("a").remaining, 1);
        assert_eq!(limiter.check("a").remaining, 0);
        assert!(!limiter.check("a").allowed);
        // other clients unaffected
        assert!(limiter.check("b").allowed);
        assert_eq!(limiter.tracked_clients(), 2);
    }

    #[test]
    fn test_cleanup_keeps_fresh_entries() {
        let limiter = limiter(5);
        limiter.check("a");
        assert_eq!(limiter.cleanup(), 0);
        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn test_client_key_behind_proxy() {
        let peer = Some(IpAddr::from([10, 0, 0, 1]));
        let mut headers = HeaderMap::new();
        assert_eq!(client_key(&headers, peer, true), "10.0.0.1");

        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_key(&headers, peer, true), "10.0.0.2");

        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(client_key(&headers, peer, true), "203.0.113.7");
    }

    #[test]
    fn test_client_key_ignores_headers_by_default() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7"));

        let peer = Some(IpAddr::from([192, 0, 2, 10]));
        assert_eq!(client_key(&headers, peer, false), "192.0.2.10");
        assert_eq!(client_key(&headers, None, false), "unknown");
    }
}
