use crate::{
    domain::{requests::CatalogFilterRequest, response::CatalogData},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCatalogQueryService = Arc<dyn CatalogQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CatalogQueryServiceTrait {
    async fn find_catalog(&self, req: &CatalogFilterRequest) -> Result<CatalogData, ServiceError>;
}
