use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Dimensionality of the embedding vectors produced by the embedding
/// model and declared on the vector-search index. The two must agree or
/// Atlas rejects the query.
pub const EMBEDDING_DIMENSIONS: u32 = 1536;

/// Property type
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PropertyType {
    #[default]
    Apartment,
    House,
    Studio,
    Penthouse,
}

/// Whether a property is offered for sale, for rent, or both
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BusinessType {
    #[default]
    Sale,
    Rent,
    Both,
}

/// Physical characteristics of a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropertyFeatures {
    /// Usable area in square meters
    pub area_m2: u32,
    pub bedrooms: u32,
    pub suites: u32,
    pub parking_spaces: u32,
    pub bathrooms: u32,
}

/// Where the property is located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropertyLocation {
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Pricing information. Sale and rent prices are optional because a
/// listing carries only the prices that match its business type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_price: Option<f64>,
    pub condo_fee: f64,
    pub property_tax: f64,
}

/// Structured attributes of a single listing (the `data` field of the
/// persisted document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyData {
    pub title: String,
    pub property_type: PropertyType,
    pub business_type: BusinessType,
    pub features: PropertyFeatures,
    pub location: PropertyLocation,
    pub prices: PropertyPrices,
    pub amenities: Vec<String>,
    pub description: String,
}

/// A source record before enrichment: structured data only, no
/// generated copy and no embedding. Produced by the mock-data generator
/// and consumed by the enrichment job.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyRecord {
    pub id: String,
    pub data: PropertyData,
}

/// Enriched listing as persisted in the `properties` collection.
///
/// Invariant: `embedding` always vectorizes the current `listing_copy`;
/// the enrichment job regenerates both together before every upsert.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyDocument {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Structured listing attributes
    pub data: PropertyData,
    /// LLM-generated marketing text
    pub listing_copy: String,
    /// Embedding of `listing_copy`, EMBEDDING_DIMENSIONS wide
    pub embedding: Vec<f32>,
    /// Creation timestamp (first enrichment)
    pub created_at: DateTime<Utc>,
    /// Last enrichment timestamp
    pub updated_at: DateTime<Utc>,
}

impl PropertyDocument {
    /// Build an enriched document from a source record plus the freshly
    /// generated copy and its embedding.
    pub fn new(record: PropertyRecord, listing_copy: String, embedding: Vec<f32>) -> Self {
        let now = Utc::now();
        Self {
            id: record.id,
            data: record.data,
            listing_copy,
            embedding,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A vector-search hit as projected out of the aggregation pipeline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoredDocument {
    #[serde(rename = "_id")]
    pub id: String,
    /// Similarity score reported by the search engine
    pub score: f64,
    pub data: PropertyData,
    pub listing_copy: String,
}

/// Search request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SearchRequest {
    /// Free-text query, e.g. "apartment with pool near the beach"
    #[serde(default)]
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
    /// Maximum number of results to return. Passed through to the
    /// search backend unchecked; only an empty query is rejected.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    5
}

/// One listing in an API response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyResult {
    pub id: String,
    /// Similarity score; 0.0 for direct lookups where no search ran
    pub score: f64,
    pub data: PropertyData,
    pub listing_copy: String,
}

impl From<ScoredDocument> for PropertyResult {
    fn from(doc: ScoredDocument) -> Self {
        Self {
            id: doc.id,
            score: doc.score,
            data: doc.data,
            listing_copy: doc.listing_copy,
        }
    }
}

impl From<PropertyDocument> for PropertyResult {
    fn from(doc: PropertyDocument) -> Self {
        Self {
            id: doc.id,
            score: 0.0,
            data: doc.data,
            listing_copy: doc.listing_copy,
        }
    }
}

/// Search response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<PropertyResult>,
    /// Plain-text summary of the matches; absent when nothing survives
    /// the score threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Outcome of an enrichment run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    /// Documents successfully generated, embedded, and upserted
    pub enriched: usize,
    /// Records skipped after a provider or database failure
    pub failed: usize,
}
