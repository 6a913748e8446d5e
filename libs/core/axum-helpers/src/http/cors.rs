use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method, and header. This service has no browser
/// credential flows, so the open policy matches how the API is consumed.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
