use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, to_bson};
use mongodb::{Collection, Database, SearchIndexModel};
use tracing::{debug, info};

use crate::error::ListingResult;
use crate::models::{EMBEDDING_DIMENSIONS, PropertyDocument, ScoredDocument};
use crate::repository::ListingRepository;

/// Collection holding the enriched listings
pub const COLLECTION_NAME: &str = "properties";

/// Name of the Atlas vector-search index over the embedding field
pub const VECTOR_INDEX_NAME: &str = "vector_index";

/// MongoDB-backed listing repository
#[derive(Clone)]
pub struct MongoListingRepository {
    db: Database,
    collection: Collection<PropertyDocument>,
}

impl MongoListingRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<PropertyDocument>(COLLECTION_NAME);
        Self { db, collection }
    }
}

/// Build the aggregation pipeline for an approximate nearest-neighbor
/// query over the embedding field.
fn build_vector_search_pipeline(
    query_vector: &[f32],
    limit: i64,
    num_candidates: i64,
    index_name: &str,
) -> Vec<Document> {
    let vector: Vec<f64> = query_vector.iter().map(|v| f64::from(*v)).collect();
    vec![
        doc! {
            "$vectorSearch": {
                "index": index_name,
                "path": "embedding",
                "queryVector": vector,
                "numCandidates": num_candidates,
                "limit": limit,
            }
        },
        doc! {
            "$project": {
                "_id": 1,
                "data": 1,
                "listing_copy": 1,
                "score": { "$meta": "vectorSearchScore" },
            }
        },
    ]
}

#[async_trait]
impl ListingRepository for MongoListingRepository {
    async fn upsert(&self, document: &PropertyDocument) -> ListingResult<()> {
        let result = self
            .collection
            .replace_one(doc! { "_id": &document.id }, document)
            .upsert(true)
            .await?;
        debug!(
            id = %document.id,
            matched = result.matched_count,
            "Upserted property document"
        );
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> ListingResult<Option<PropertyDocument>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document)
    }

    async fn vector_search(
        &self,
        query_vector: &[f32],
        limit: i64,
        num_candidates: i64,
    ) -> ListingResult<Vec<ScoredDocument>> {
        let pipeline =
            build_vector_search_pipeline(query_vector, limit, num_candidates, VECTOR_INDEX_NAME);
        let cursor = self.collection.aggregate(pipeline).await?;
        let raw: Vec<Document> = cursor.try_collect().await?;

        let mut results = Vec::with_capacity(raw.len());
        for document in raw {
            results.push(mongodb::bson::from_document::<ScoredDocument>(document)?);
        }
        Ok(results)
    }

    async fn ensure_collection(&self) -> ListingResult<()> {
        let existing = self.db.list_collection_names().await?;
        if existing.iter().any(|name| name == COLLECTION_NAME) {
            debug!(collection = COLLECTION_NAME, "Collection already exists");
            return Ok(());
        }
        self.db.create_collection(COLLECTION_NAME).await?;
        info!(collection = COLLECTION_NAME, "Created collection");
        Ok(())
    }

    async fn ensure_vector_index(&self) -> ListingResult<()> {
        let existing: Vec<Document> = self
            .collection
            .list_search_indexes()
            .await?
            .try_collect()
            .await?;
        let already_there = existing
            .iter()
            .any(|index| index.get_str("name") == Ok(VECTOR_INDEX_NAME));
        if already_there {
            debug!(index = VECTOR_INDEX_NAME, "Vector index already exists");
            return Ok(());
        }

        let definition = doc! {
            "fields": [{
                "type": "vector",
                "path": "embedding",
                "numDimensions": to_bson(&EMBEDDING_DIMENSIONS)?,
                "similarity": "dotProduct",
            }]
        };
        let model = SearchIndexModel::builder()
            .definition(definition)
            .name(VECTOR_INDEX_NAME.to_string())
            .index_type(mongodb::SearchIndexType::VectorSearch)
            .build();

        let name = self.collection.create_search_index(model).await?;
        info!(index = %name, "Created vector search index");
        Ok(())
    }
}
