//! Resource services.
//!
//! One async trait per resource, each with an HTTP implementation. Stores
//! depend on the traits only.

pub mod auth;
pub mod carts;
pub mod foods;
pub mod orders;
pub mod restaurants;

pub use auth::{AuthService, HttpAuthService, MockAuthService};
pub use carts::{CartService, HttpCartService, MockCartService};
pub use foods::{FoodsService, HttpFoodsService, MockFoodsService};
pub use orders::{HttpOrdersService, MockOrdersService, OrdersService};
pub use restaurants::{HttpRestaurantsService, MockRestaurantsService, RestaurantsService};
