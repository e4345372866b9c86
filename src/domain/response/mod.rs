pub mod api;
pub mod cart;
pub mod catalog;
pub mod product;

pub use self::api::ApiResponse;
pub use self::cart::{CartData, CartItemResponse};
pub use self::catalog::CatalogData;
pub use self::product::ProductResponse;
