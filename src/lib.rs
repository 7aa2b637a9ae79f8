//! Morsel
//!
//! Morsel is the core of a food-ordering client: the server record
//! projections, checkout pricing, restaurant and menu selectors, client-side
//! validation and the request lifecycle state machine shared by every store.

pub mod addresses;
pub mod carts;
pub mod foods;
pub mod ids;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod restaurants;
pub mod secret;
pub mod store;
pub mod users;
pub mod validation;
