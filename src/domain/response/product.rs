use crate::model::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub gender: String,
    pub image_url: String,
    pub stock: i64,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description,
            category: value.category,
            gender: value.gender,
            image_url: value.image_url,
            stock: value.stock,
        }
    }
}
