use async_trait::async_trait;

use crate::error::ListingResult;
use crate::models::{PropertyDocument, ScoredDocument};

/// Persistence operations for enriched property listings
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync + 'static {
    /// Insert or replace a document keyed by its id
    async fn upsert(&self, document: &PropertyDocument) -> ListingResult<()>;

    /// Fetch a single document by id
    async fn get_by_id(&self, id: &str) -> ListingResult<Option<PropertyDocument>>;

    /// Run an approximate nearest-neighbor search over the embedding
    /// field and return hits with their similarity scores, best first
    async fn vector_search(
        &self,
        query_vector: &[f32],
        limit: i64,
        num_candidates: i64,
    ) -> ListingResult<Vec<ScoredDocument>>;

    /// Create the backing collection if it does not exist yet
    async fn ensure_collection(&self) -> ListingResult<()>;

    /// Create the vector-search index if it does not exist yet
    async fn ensure_vector_index(&self) -> ListingResult<()>;
}
