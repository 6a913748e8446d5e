//! Service description served at the root path

use axum::{Json, Router, routing::get};
use core_config::AppInfo;
use serde_json::{Value, json};

/// Create the root router describing the service
pub fn router(app: AppInfo) -> Router {
    Router::new().route("/", get(move || service_description(app)))
}

async fn service_description(app: AppInfo) -> Json<Value> {
    Json(json!({
        "name": app.name,
        "version": app.version,
        "description": "Semantic search over real-estate listings",
        "endpoints": {
            "search": "POST /api/search",
            "property": "GET /api/property/{id}",
            "health": "GET /health",
            "ready": "GET /ready",
            "docs": "GET /swagger-ui",
        }
    }))
}
