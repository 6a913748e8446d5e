use axum::response::{IntoResponse, Response};
use axum_helpers::errors::AppError;
use thiserror::Error;

/// Errors for listing operations
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("LLM provider error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ListingResult<T> = Result<T, ListingError>;

impl From<mongodb::error::Error> for ListingError {
    fn from(err: mongodb::error::Error) -> Self {
        ListingError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ListingError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ListingError::Database(format!("BSON serialization: {err}"))
    }
}

impl From<mongodb::bson::de::Error> for ListingError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        ListingError::Database(format!("BSON deserialization: {err}"))
    }
}

impl From<reqwest::Error> for ListingError {
    fn from(err: reqwest::Error) -> Self {
        ListingError::Llm(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ListingError {
    fn from(err: validator::ValidationErrors) -> Self {
        ListingError::Validation(err.to_string())
    }
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::NotFound(msg) => AppError::NotFound(msg),
            ListingError::Validation(msg) => AppError::BadRequest(msg),
            ListingError::Database(msg) => AppError::DatabaseError(msg),
            ListingError::Llm(msg) => AppError::UpstreamError(msg),
            ListingError::Config(msg) | ListingError::Internal(msg) => {
                AppError::InternalServerError(msg)
            }
        }
    }
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_helpers::errors::ErrorCode;
    use http_body_util::BodyExt;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ListingError::NotFound("property_001".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ListingError::Validation("query must not be empty".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_database_maps_to_500_with_database_code() {
        let response = ListingError::Database("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], ErrorCode::DatabaseError.code());
        assert_eq!(body["error"], "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_llm_maps_to_500_with_upstream_code() {
        let response = ListingError::Llm("rate limited".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], ErrorCode::UpstreamError.code());
        assert_eq!(body["error"], "UPSTREAM_ERROR");
        assert_eq!(body["message"], "rate limited");
    }

    #[test]
    fn test_error_display() {
        let err = ListingError::NotFound("property_007".to_string());
        assert_eq!(err.to_string(), "Property not found: property_007");
    }
}
