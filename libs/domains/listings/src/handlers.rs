use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::ListingError;
use crate::llm::LlmProvider;
use crate::models::{PropertyResult, SearchRequest, SearchResponse};
use crate::repository::ListingRepository;
use crate::service::ListingService;

/// OpenAPI documentation for the listings endpoints
#[derive(OpenApi)]
#[openapi(
    paths(search, get_property),
    components(schemas(
        SearchRequest,
        SearchResponse,
        PropertyResult,
        crate::models::PropertyData,
        crate::models::PropertyFeatures,
        crate::models::PropertyLocation,
        crate::models::PropertyPrices,
        crate::models::PropertyType,
        crate::models::BusinessType,
    )),
    tags(
        (name = "listings", description = "Semantic search over real-estate listings")
    )
)]
pub struct ApiDoc;

/// Build the listings router with the given service as state
pub fn router<R, L>(service: Arc<ListingService<R, L>>) -> Router
where
    R: ListingRepository,
    L: LlmProvider,
{
    Router::new()
        .route("/search", post(search::<R, L>))
        .route("/property/{id}", get(get_property::<R, L>))
        .with_state(service)
}

/// Search listings with a free-text query
#[utoipa::path(
    post,
    path = "/search",
    tag = "listings",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching listings with a summary", body = SearchResponse),
        (status = 400, description = "Empty or invalid query"),
        (status = 500, description = "Search backend or provider failure")
    )
)]
async fn search<R, L>(
    State(service): State<Arc<ListingService<R, L>>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ListingError>
where
    R: ListingRepository,
    L: LlmProvider,
{
    let response = service.search(request).await?;
    Ok(Json(response))
}

/// Fetch a single listing by id
#[utoipa::path(
    get,
    path = "/property/{id}",
    tag = "listings",
    params(
        ("id" = String, Path, description = "Property identifier")
    ),
    responses(
        (status = 200, description = "The listing", body = PropertyResult),
        (status = 404, description = "No listing with that id")
    )
)]
async fn get_property<R, L>(
    State(service): State<Arc<ListingService<R, L>>>,
    Path(id): Path<String>,
) -> Result<Json<PropertyResult>, ListingError>
where
    R: ListingRepository,
    L: LlmProvider,
{
    let result = service.get_property(&id).await?;
    Ok(Json(result))
}
