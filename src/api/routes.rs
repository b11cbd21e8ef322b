//! API Route Configuration

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::{logging_middleware, rate_limit_middleware};

/// Conversion endpoints, mounted under both `/api` and `/v1`
fn conversion_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/terbilang",
            get(handlers::terbilang).post(handlers::terbilang),
        )
        .route("/terbilang-plain", get(handlers::terbilang_plain))
}

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // OPTIONS requests are answered by the CORS layer itself
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let request_timeout = state.config.request_timeout;
    let max_body_bytes = state.config.max_body_bytes;

    let api_v1 = conversion_routes().route("/health", get(handlers::health_check));

    Router::new()
        // /api paths kept for existing clients
        .nest("/api", conversion_routes())
        .nest("/v1", api_v1)
        .route("/health", get(handlers::health_check))
        .with_state(state.clone())
        // Middleware (order matters - bottom runs first)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
        .layer(cors)
}
