pub mod cart;
pub mod catalog;
pub mod product;

pub use self::cart::{CartServiceTrait, DynCartService};
pub use self::catalog::{CatalogQueryServiceTrait, DynCatalogQueryService};
pub use self::product::{DynProductQueryRepository, ProductQueryRepositoryTrait};
