//! API routes module

pub mod health;
pub mod root;

use std::sync::Arc;

use axum::Router;
use domain_listings::{ListingService, MongoListingRepository, OpenAiProvider, handlers};

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    let repository = MongoListingRepository::new(state.db.clone());
    let llm = OpenAiProvider::new(state.config.openai.clone());
    let service = Arc::new(ListingService::with_settings(
        repository,
        llm,
        state.config.search,
    ));

    handlers::router(service)
}
