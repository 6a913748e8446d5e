//! Shared application state passed to request handlers.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned per handler (inexpensive, the MongoDB client is an Arc over
/// its connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
