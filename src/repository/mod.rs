pub mod query;
pub mod seed;

pub use self::query::ProductQueryRepository;
pub use self::seed::ProductSeeder;
