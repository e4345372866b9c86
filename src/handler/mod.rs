mod cart;
mod catalog;

use crate::{errors::HttpError, state::AppState, utils::shutdown_signal};
use anyhow::Result;
use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::cart::{add_to_cart, get_cart};
pub use self::catalog::get_catalog;

#[derive(OpenApi)]
#[openapi(
    paths(catalog::get_catalog, cart::add_to_cart, cart::get_cart),
    tags(
        (name = "Catalog", description = "Product catalog endpoints"),
        (name = "Cart", description = "Session cart endpoints"),
    )
)]
struct ApiDoc;

async fn fallback_handler() -> HttpError {
    HttpError::NotFound("Resource not found".to_string())
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(state: AppState) -> Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(get_catalog))
            .route("/add_to_cart/{product_id}", get(add_to_cart))
            .route("/cart", get(get_cart))
            .layer(Extension(state.di_container.catalog_query.clone()))
            .layer(Extension(state.di_container.cart.clone()))
            .with_state(state);

        let (router, api) = api_router.split_for_parts();

        router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .fallback(fallback_handler)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, state: AppState) -> Result<()> {
        let app = Self::build(state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
