use crate::domain::response::product::ProductResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A cart entry resolved against the catalog.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    pub subtotal: f64,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartData {
    pub items: Vec<CartItemResponse>,
    pub total: f64,
}
