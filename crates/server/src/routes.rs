use std::sync::Arc;

use axum::{
    http::Method,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::{CatalogStore, MemoryCatalog};

use crate::openapi::ApiDoc;

pub mod cats;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// State backed by the in-memory catalog with its startup records.
    pub fn seeded() -> Self {
        Self::new(Arc::new(MemoryCatalog::seeded()))
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Any origin, GET and POST only.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Build the full application router: health, docs and the cat catalog
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Public routes (health + Swagger UI, which also serves the raw document)
    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()));

    // Catalog routes
    let cat_routes = Router::new()
        .route("/cats", get(cats::list_cats).post(cats::create_cat))
        .route("/cats/:name", get(cats::get_cat));

    // Compose
    public
        .merge(cat_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
