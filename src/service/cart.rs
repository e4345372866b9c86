use crate::{
    abstract_trait::{cart::CartServiceTrait, product::DynProductQueryRepository},
    domain::response::{CartData, CartItemResponse},
    errors::ServiceError,
    session::Cart,
};
use async_trait::async_trait;
use tracing::{debug, info};

#[derive(Clone)]
pub struct CartService {
    query: DynProductQueryRepository,
}

impl CartService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn resolve(&self, cart: &Cart) -> Result<CartData, ServiceError> {
        info!("🛒 Resolving cart with {} entries", cart.entries().count());

        let mut items = Vec::new();
        let mut total = 0.0_f64;

        for (product_id, quantity) in cart.entries() {
            // Ids added before a product was deleted stay in the cookie; they
            // are skipped here without cleanup.
            let Some(product) = self.query.find_by_id(product_id).await? else {
                debug!("Cart references missing product {product_id}, skipping");
                continue;
            };

            let subtotal = product.price * f64::from(quantity);
            total += subtotal;
            items.push(CartItemResponse {
                product: product.into(),
                quantity,
                subtotal,
            });
        }

        Ok(CartData { items, total })
    }
}
