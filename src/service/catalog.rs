use crate::{
    abstract_trait::{
        catalog::CatalogQueryServiceTrait,
        product::DynProductQueryRepository,
    },
    domain::{
        requests::CatalogFilterRequest,
        response::{CatalogData, ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct CatalogQueryService {
    query: DynProductQueryRepository,
}

impl CatalogQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CatalogQueryServiceTrait for CatalogQueryService {
    async fn find_catalog(&self, req: &CatalogFilterRequest) -> Result<CatalogData, ServiceError> {
        info!(
            "🛍️ Fetching catalog with gender: {}, category: {}",
            req.gender, req.category
        );

        let products = self
            .query
            .find_filtered(req.gender_filter(), req.category_filter())
            .await?;

        // The category list feeds the filter UI, so it is always unfiltered.
        let categories = self.query.distinct_categories().await?;

        Ok(CatalogData {
            products: products.into_iter().map(ProductResponse::from).collect(),
            categories,
            selected_gender: req.gender.clone(),
            selected_category: req.category.clone(),
        })
    }
}
