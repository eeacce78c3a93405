use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// CORS for the public site and the admin portal. Reads are open to any
/// origin; writes still need an admin bearer token.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
