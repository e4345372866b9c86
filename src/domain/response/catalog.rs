use crate::domain::requests::catalog::ALL;
use crate::domain::response::product::ProductResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CatalogData {
    pub products: Vec<ProductResponse>,
    /// Distinct category labels across the whole catalog, independent of the
    /// active filters.
    pub categories: Vec<String>,
    pub selected_gender: String,
    pub selected_category: String,
}

impl Default for CatalogData {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            selected_gender: ALL.to_string(),
            selected_category: ALL.to_string(),
        }
    }
}
