//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Real Estate Listings API",
        version = "0.1.0",
        description = "Semantic search over real-estate listings backed by MongoDB Atlas \
                       vector search and OpenAI",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_listings::ApiDoc)
    ),
    tags(
        (name = "listings", description = "Semantic search over real-estate listings")
    )
)]
pub struct ApiDoc;
