//! Test fixtures.

use morsel::{
    carts::{Cart, CartItem},
    foods::{Food, FoodCategory},
    ids::Id,
    orders::{Order, OrderStatus, PaymentMethod},
    restaurants::Restaurant,
};
use rust_decimal::Decimal;

pub(crate) fn restaurant(id: u64, name: &str) -> Restaurant {
    Restaurant {
        id: Id::new(id),
        name: name.to_string(),
        description: None,
        cuisine_type: Some("South Indian".to_string()),
        open: true,
        rating: None,
        delivery_time: Some(30),
        images: Vec::new(),
        address: None,
    }
}

pub(crate) fn food(id: u64, name: &str, price: i64, category: Option<&str>) -> Food {
    Food {
        id: Id::new(id),
        name: name.to_string(),
        description: None,
        price: Decimal::new(price, 0),
        food_category: category.map(|name| FoodCategory {
            id: None,
            name: name.to_string(),
        }),
        images: Vec::new(),
        available: true,
        vegetarian: false,
        seasonal: false,
    }
}

pub(crate) fn cart_item(id: u64, price: i64, quantity: u32) -> CartItem {
    CartItem {
        id: Id::new(id),
        food: food(id, "Thali", price, None),
        quantity,
        ingredients: Vec::new(),
        total_price: None,
    }
}

pub(crate) fn cart(items: Vec<CartItem>) -> Cart {
    Cart {
        id: Some(Id::new(1)),
        items,
        total: None,
    }
}

pub(crate) fn order(id: u64, total: i64) -> Order {
    Order {
        id: Id::new(id),
        items: Vec::new(),
        delivery_address: None,
        payment_method: Some(PaymentMethod::Card),
        status: OrderStatus::Pending,
        total_amount: Decimal::new(total, 0),
        created_at: None,
    }
}
