pub mod connection;
pub mod myconfig;

pub use self::connection::{ConnectionManager, ConnectionPool};
pub use self::myconfig::Config;
