use crate::{
    abstract_trait::{DynCartService, DynCatalogQueryService, DynProductQueryRepository},
    config::ConnectionPool,
    repository::ProductQueryRepository,
    service::{CartService, CatalogQueryService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub catalog_query: DynCatalogQueryService,
    pub cart: DynCartService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("catalog_query", &"CatalogQueryService")
            .field("cart", &"CartService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool));

        let catalog_query: DynCatalogQueryService =
            Arc::new(CatalogQueryService::new(product_query.clone()));

        let cart: DynCartService = Arc::new(CartService::new(product_query));

        Self {
            catalog_query,
            cart,
        }
    }
}
