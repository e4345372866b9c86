pub mod cart;
pub mod flash;

pub use self::cart::{CART_COOKIE, Cart};
pub use self::flash::{FLASH_COOKIE, Flash};
