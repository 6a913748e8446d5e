//! Listings Domain
//!
//! Semantic search over real-estate listings backed by MongoDB Atlas
//! vector search and the OpenAI API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (search, lookup)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← query validation, threshold filter, summarization,
//! └──────┬──────┘    offline enrichment
//!        │
//! ┌──────┼───────────────┐
//! │ Repository           │  ← MongoDB: upsert, lookup, $vectorSearch
//! │ LlmProvider          │  ← OpenAI: chat completions, embeddings
//! └──────┬───────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← property documents, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use domain_listings::{
//!     handlers,
//!     llm::{OpenAiConfig, OpenAiProvider},
//!     mongodb::MongoListingRepository,
//!     service::ListingService,
//! };
//! use mongodb::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("real_estate");
//!
//! let repository = MongoListingRepository::new(db);
//! let llm = OpenAiProvider::from_env()?;
//! let service = Arc::new(ListingService::new(repository, llm));
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod mongodb;
pub mod prompts;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ListingError, ListingResult};
pub use handlers::ApiDoc;
pub use llm::{LlmProvider, OpenAiConfig, OpenAiProvider};
pub use models::{
    EMBEDDING_DIMENSIONS, EnrichmentReport, PropertyData, PropertyDocument, PropertyRecord,
    PropertyResult, ScoredDocument, SearchRequest, SearchResponse,
};
pub use mongodb::MongoListingRepository;
pub use repository::ListingRepository;
pub use service::{ListingService, SearchSettings};
