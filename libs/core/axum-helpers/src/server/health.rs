use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::Serialize;

/// Liveness response: the process is up and serving requests.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Create a router exposing `GET /health`.
///
/// Readiness checks (database connectivity etc.) are app-specific and
/// should be merged separately.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
/// use core_config::app_info;
///
/// let app = router.merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}

async fn health_handler(State(app_info): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: app_info.name,
        version: app_info.version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint_returns_ok() {
        let app = health_router(AppInfo {
            name: "test-app",
            version: "0.0.1",
        });

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["name"], "test-app");
    }
}
