//! Morsel prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    addresses::Address,
    carts::{AddCartItem, Cart, CartId, CartItem, CartItemId, QuantityChange, UpdateCartItem},
    foods::{Food, FoodCategory, FoodId, MenuSection, categories, group_by_category, in_category},
    ids::Id,
    orders::{
        CreatedAt, Order, OrderHistory, OrderId, OrderItem, OrderStatus, PaymentMethod, PlaceOrder,
    },
    pricing::{PricingError, Totals, format_amount},
    restaurants::{
        Restaurant, RestaurantFilter, RestaurantId, RestaurantSort, display_source,
        filter_and_sort,
    },
    secret::Secret,
    store::{Failure, Resource, Status, Ticket},
    users::{AuthResponse, Credentials, ProfileUpdate, Registration, Role, User, UserId},
    validation::{
        ValidationError, normalize_keyword, validate_delivery_address, validate_quantity,
        validate_registration, validate_sign_in,
    },
};
