use crate::{
    abstract_trait::DynCatalogQueryService,
    domain::{
        requests::CatalogFilterRequest,
        response::{ApiResponse, CatalogData},
    },
    session::Flash,
};
use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
};
use axum_extra::extract::SignedCookieJar;
use tracing::error;

#[utoipa::path(
    get,
    path = "/",
    tag = "Catalog",
    params(CatalogFilterRequest),
    responses(
        (status = 200, description = "Catalog listing with distinct categories; degrades to an empty catalog on storage errors", body = ApiResponse<CatalogData>)
    )
)]
pub async fn get_catalog(
    Extension(service): Extension<DynCatalogQueryService>,
    jar: SignedCookieJar,
    Query(params): Query<CatalogFilterRequest>,
) -> impl IntoResponse {
    let (jar, flash) = Flash::take(jar);

    match service.find_catalog(&params).await {
        Ok(data) => {
            let (status, message) = match flash {
                Some(flash) => (flash.as_str().to_string(), flash.message().to_string()),
                None => (
                    "success".to_string(),
                    "Products fetched successfully".to_string(),
                ),
            };

            (
                jar,
                Json(ApiResponse {
                    status,
                    message,
                    data,
                }),
            )
        }
        Err(e) => {
            error!("❌ Failed to load catalog: {e}");

            (
                jar,
                Json(ApiResponse {
                    status: "error".to_string(),
                    message: "An error occurred while loading products".to_string(),
                    data: CatalogData::default(),
                }),
            )
        }
    }
}
