pub mod cart;
pub mod catalog;

pub use self::cart::CartService;
pub use self::catalog::CatalogQueryService;
