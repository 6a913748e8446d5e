//! Type-safe error codes for API responses.
//!
//! Single source of truth for error codes used across the workspace.
//! Each error code includes:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Requested resource was not found
    NotFound,

    /// Request is malformed or missing required fields
    BadRequest,

    /// JSON extraction from request body failed
    JsonExtraction,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Downstream errors (2000s)
    /// Database connection or query error
    DatabaseError,

    /// An external provider (LLM, embedding endpoint) call failed
    UpstreamError,

    // Serialization errors (5000s)
    /// JSON serialization/deserialization failed server-side
    SerdeJsonError,
}

impl ErrorCode {
    /// String identifier sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
            ErrorCode::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::JsonExtraction => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::BadRequest => 1006,
            ErrorCode::InternalError => 1005,
            ErrorCode::ServiceUnavailable => 1007,
            ErrorCode::DatabaseError => 2001,
            ErrorCode::UpstreamError => 2101,
            ErrorCode::SerdeJsonError => 5001,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::JsonExtraction => "Failed to extract JSON from request body",
            ErrorCode::NotFound => "Requested resource was not found",
            ErrorCode::BadRequest => "Request is malformed",
            ErrorCode::InternalError => "An unexpected internal server error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
            ErrorCode::DatabaseError => "A database error occurred",
            ErrorCode::UpstreamError => "An upstream provider call failed",
            ErrorCode::SerdeJsonError => "JSON serialization failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_round_trip() {
        let code = ErrorCode::ValidationError;
        assert_eq!(code.as_str(), "VALIDATION_ERROR");
        assert_eq!(code.code(), 1001);
        assert_eq!(code.default_message(), "Request validation failed");
    }

    #[test]
    fn test_error_codes_are_unique() {
        let codes = [
            ErrorCode::ValidationError,
            ErrorCode::JsonExtraction,
            ErrorCode::NotFound,
            ErrorCode::BadRequest,
            ErrorCode::InternalError,
            ErrorCode::ServiceUnavailable,
            ErrorCode::DatabaseError,
            ErrorCode::UpstreamError,
            ErrorCode::SerdeJsonError,
        ];
        let mut seen = std::collections::HashSet::new();
        for code in codes {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }
}
