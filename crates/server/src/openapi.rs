use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct CatDoc { pub name: String, pub category: String }

#[derive(ToSchema)]
pub struct NewCatDoc { pub name: String, pub category: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatPageDoc {
    pub cats: Vec<CatDoc>,
    pub total_count: usize,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Cats", description = "Cats as a service", version = "1.0.0"),
    paths(
        crate::routes::health,
        crate::routes::cats::get_cat,
        crate::routes::cats::list_cats,
        crate::routes::cats::create_cat,
    ),
    components(
        schemas(
            HealthResponse,
            CatDoc,
            NewCatDoc,
            CatPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "Cats")
    )
)]
pub struct ApiDoc;
