use crate::{domain::response::CartData, errors::ServiceError, session::Cart};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    /// Resolves every cart entry against the catalog and computes line-item
    /// subtotals plus the grand total. Entries whose product no longer exists
    /// are skipped.
    async fn resolve(&self, cart: &Cart) -> Result<CartData, ServiceError>;
}
