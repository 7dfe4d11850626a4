//! HTTP route handlers.
//!
//! Routes are grouped by their cross-origin policy. Each group gets its CORS
//! headers from `SetResponseHeaderLayer`, so every response on the group
//! carries them, including pre-flight answers and error bodies.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod convert;
pub mod health;
pub mod request;
pub mod response;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{
            HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
        },
        StatusCode,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{
    CORS_ALLOW_ORIGIN, CORS_CONVERT_HEADERS, CORS_CONVERT_METHODS, CORS_HEALTH_HEADERS,
    CORS_HEALTH_MAX_AGE, CORS_HEALTH_METHODS,
};
use crate::middleware::request_id_layer;

/// Pre-flight handler: 204 with no body.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Creates the Axum router with all routes and CORS headers.
pub fn create_router() -> Router {
    // Conversion - POST only, anything else besides OPTIONS is a 405
    let convert_routes = Router::new()
        .route(
            "/api/decode",
            post(convert::decode)
                .options(preflight)
                .fallback(convert::method_not_allowed),
        )
        .route(
            "/api/encode",
            post(convert::encode)
                .options(preflight)
                .fallback(convert::method_not_allowed),
        )
        .route_layer(cors_header(ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN))
        .route_layer(cors_header(ACCESS_CONTROL_ALLOW_METHODS, CORS_CONVERT_METHODS))
        .route_layer(cors_header(ACCESS_CONTROL_ALLOW_HEADERS, CORS_CONVERT_HEADERS))
        // Inputs of any size are accepted; failures are only ever 400 or 405
        .route_layer(DefaultBodyLimit::disable());

    // Health check - answers every method, no caching
    let health_routes = Router::new()
        .route(
            "/api/health",
            get(health::health)
                .options(preflight)
                .fallback(health::health),
        )
        .route_layer(cors_header(ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN))
        .route_layer(cors_header(ACCESS_CONTROL_ALLOW_METHODS, CORS_HEALTH_METHODS))
        .route_layer(cors_header(ACCESS_CONTROL_ALLOW_HEADERS, CORS_HEALTH_HEADERS))
        .route_layer(cors_header(ACCESS_CONTROL_MAX_AGE, CORS_HEALTH_MAX_AGE));

    Router::new()
        .merge(convert_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
