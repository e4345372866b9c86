use crate::{errors::RepositoryError, model::Product};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// `None` means no filter on that column; unknown values simply match
    /// nothing.
    async fn find_filtered(
        &self,
        gender: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError>;

    async fn distinct_categories(&self) -> Result<Vec<String>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
}
