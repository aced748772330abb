use axum::{extract::{Path, Query, State}, Json};
use tracing::info;

use service::{Cat, CatPage, ListQuery, NewCat};

use crate::errors::ApiError;
use crate::routes::AppState;

/// Get a single cat by name
#[utoipa::path(
    get,
    path = "/cats/{name}",
    tag = "Cats",
    params(("name" = String, Path, description = "Cat name")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CatDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_cat(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Cat>, ApiError> {
    state.catalog.get(&name).await.map(Json).ok_or(ApiError::NotFound)
}

/// Get all cats
#[utoipa::path(
    get,
    path = "/cats",
    tag = "Cats",
    params(
        ("limit" = Option<usize>, Query, description = "Page size"),
        ("offset" = Option<usize>, Query, description = "Page offset"),
        ("category" = Option<String>, Query, description = "Filter by category")
    ),
    responses((status = 200, description = "OK", body = crate::openapi::CatPageDoc), (status = 400, description = "Bad Request"))
)]
pub async fn list_cats(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<CatPage> {
    Json(state.catalog.list(query).await)
}

/// Create a cat
#[utoipa::path(
    post,
    path = "/cats",
    tag = "Cats",
    request_body = crate::openapi::NewCatDoc,
    responses((status = 200, description = "The submitted body, unchanged", body = crate::openapi::NewCatDoc), (status = 422, description = "Unprocessable Entity"))
)]
pub async fn create_cat(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let input = serde_json::from_value::<NewCat>(body.clone())
        .map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let cat = state.catalog.create(input).await;
    info!(name = %cat.name, category = %cat.category, "created cat");
    // echo what the client sent, extra fields included
    Ok(Json(body))
}
