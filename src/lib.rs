//! OODD
//!
//! Storefront core for the OODD custom apparel brand: the cart state
//! machine with its checkout-message serialization and local persistence,
//! the static product/sticker catalogs, and the t-shirt customizer design
//! model. Checkout is an outbound messaging deep link; there is no server
//! side and no state beyond the persisted cart.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customizer;
pub mod lines;
pub mod notify;
pub mod persist;
pub mod prelude;
