use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub gender: String,
    pub image_url: String,
    pub stock: i64,
}

/// Insert payload for a product that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub gender: String,
    pub image_url: String,
    pub stock: i64,
}
