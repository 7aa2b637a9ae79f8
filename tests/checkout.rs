//! Integration tests for cart totals and quantity routing

use rust_decimal::Decimal;
use testresult::TestResult;

use morsel::{
    carts::{Cart, QuantityChange},
    pricing::{PLATFORM_FEE, Totals, format_amount},
};

fn cart(json: &str) -> Result<Cart, serde_json::Error> {
    serde_json::from_str(json)
}

#[test]
fn two_item_cart_displays_two_hundred_sixty_two_fifty() -> TestResult {
    let cart = cart(
        r#"{
            "id": 1,
            "items": [
                {"id": 1, "food": {"id": 10, "name": "Thali", "price": 100}, "quantity": 2},
                {"id": 2, "food": {"id": 11, "name": "Lassi", "price": 50}, "quantity": 1}
            ],
            "total": 250
        }"#,
    )?;

    let totals = cart.totals()?;

    assert_eq!(totals.subtotal, Decimal::new(250, 0));
    assert_eq!(totals.tax, Decimal::new(1_250, 2));
    assert!(format_amount(totals.total).ends_with("262.50"));

    Ok(())
}

#[test]
fn total_items_is_sum_of_quantities() -> TestResult {
    let cart = cart(
        r#"{
            "items": [
                {"id": 1, "food": {"id": 10, "name": "Idli", "price": 40}, "quantity": 3},
                {"id": 2, "food": {"id": 11, "name": "Vada", "price": 35.5}, "quantity": 4},
                {"id": 3, "food": {"id": 12, "name": "Coffee", "price": 20}, "quantity": 1}
            ]
        }"#,
    )?;

    assert_eq!(
        cart.total_items(),
        cart.items.iter().map(|i| u64::from(i.quantity)).sum::<u64>()
    );
    assert_eq!(cart.total_items(), 8);
    assert_eq!(cart.subtotal()?, Decimal::new(2_820, 1));

    Ok(())
}

#[test]
fn empty_cart_total_is_platform_fee() -> TestResult {
    assert_eq!(Cart::default().totals()?.total, PLATFORM_FEE);

    Ok(())
}

#[test]
fn total_formula_holds_for_whole_and_fractional_subtotals() -> TestResult {
    for (subtotal, expected) in [
        (Decimal::new(100, 0), Decimal::new(110, 0)),
        (Decimal::new(250, 0), Decimal::new(26_250, 2)),
        (Decimal::new(1_999, 2), Decimal::new(259_895, 4)),
    ] {
        assert_eq!(Totals::from_subtotal(subtotal)?.total, expected);
    }

    Ok(())
}

#[test]
fn decrementing_last_unit_routes_to_remove() {
    for (current, delta) in [(1_u32, -1_i64), (3, -3), (2, -10)] {
        assert_eq!(
            QuantityChange::adjusted(current, delta),
            QuantityChange::Remove,
            "{current} {delta:+}"
        );
    }
}
