//! # Axum Helpers
//!
//! A collection of utilities and middleware shared by the HTTP services
//! in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router/server setup, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes);
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_app, create_production_app, create_router,
    health_router, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_permissive_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};
