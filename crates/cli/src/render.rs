//! Table rendering.
//!
//! Every renderer writes to an `io::Write` so commands can be tested against
//! a buffer. Empty lists render an explanatory line instead of an empty table.

use std::{io, ops::Range};

use jiff::Timestamp;
use morsel::{
    carts::Cart,
    foods::{Food, MenuSection},
    orders::{Order, OrderHistory},
    pricing::{Totals, format_amount},
    restaurants::Restaurant,
    users::{Role, User},
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use crate::errors::CliError;

/// Write a restaurant listing.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn restaurants(out: &mut impl io::Write, restaurants: &[&Restaurant]) -> Result<(), CliError> {
    if restaurants.is_empty() {
        writeln!(out, "No restaurants found.")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Name", "Cuisine", "Rating", "Delivery", "Status"]);

    for restaurant in restaurants {
        let (from, to) = restaurant.delivery_window();

        builder.push_record([
            restaurant.id.to_string(),
            restaurant.name.clone(),
            restaurant.cuisine_type.clone().unwrap_or_default(),
            format!("{:.1}", restaurant.rating_or_default()),
            format!("{from}-{to} min"),
            if restaurant.open { "Open" } else { "Closed" }.to_string(),
        ]);
    }

    write_table(out, builder, Columns::new(3..5))
}

/// Write a restaurant's header lines.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn restaurant(out: &mut impl io::Write, restaurant: &Restaurant) -> Result<(), CliError> {
    writeln!(out, "{} (#{})", restaurant.name, restaurant.id)?;

    if let Some(description) = &restaurant.description {
        writeln!(out, "{description}")?;
    }

    let (from, to) = restaurant.delivery_window();

    writeln!(
        out,
        "{} · {:.1}★ · {from}-{to} min · {}",
        restaurant.cuisine_type.as_deref().unwrap_or("Various"),
        restaurant.rating_or_default(),
        if restaurant.open { "Open now" } else { "Closed" },
    )?;

    if let Some(address) = &restaurant.address {
        writeln!(out, "{address}")?;
    }

    Ok(())
}

/// Write a menu grouped by category.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn menu(out: &mut impl io::Write, sections: &[MenuSection<'_>]) -> Result<(), CliError> {
    if sections.is_empty() {
        writeln!(out, "No menu items available.")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Item", "Category", "Price", "Notes"]);

    for section in sections {
        for food in &section.foods {
            builder.push_record(food_row(food, section.name));
        }
    }

    write_table(out, builder, Columns::new(3..4))
}

/// Write a flat list of foods, e.g. search results.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn foods(out: &mut impl io::Write, foods: &[Food]) -> Result<(), CliError> {
    if foods.is_empty() {
        writeln!(out, "No menu items found.")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Item", "Category", "Price", "Notes"]);

    for food in foods {
        builder.push_record(food_row(food, food.category_name().unwrap_or_default()));
    }

    write_table(out, builder, Columns::new(3..4))
}

fn food_row(food: &Food, category: &str) -> [String; 5] {
    let mut notes = Vec::new();

    if food.vegetarian {
        notes.push("veg");
    }

    if food.seasonal {
        notes.push("seasonal");
    }

    if !food.available {
        notes.push("unavailable");
    }

    [
        food.id.to_string(),
        food.name.clone(),
        category.to_string(),
        format_amount(food.price),
        notes.join(", "),
    ]
}

/// Write the cart with its checkout totals.
///
/// # Errors
///
/// Returns [`CliError::Pricing`] if totals overflow, or [`CliError::Io`] if
/// writing fails.
pub fn cart(out: &mut impl io::Write, cart: &Cart) -> Result<(), CliError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Line", "Item", "Qty", "Price", "Total"]);

    for item in &cart.items {
        builder.push_record([
            item.id.to_string(),
            item_label(&item.food.name, &item.ingredients),
            item.quantity.to_string(),
            format_amount(item.unit_price()),
            format_amount(item.line_total()?),
        ]);
    }

    write_table(out, builder, Columns::new(2..5))?;

    writeln!(out, " {} item(s)", cart.total_items())?;

    totals(out, &cart.totals()?)
}

fn item_label(name: &str, ingredients: &[String]) -> String {
    if ingredients.is_empty() {
        name.to_string()
    } else {
        format!("{name}\n+ {}", ingredients.join(", "))
    }
}

/// Write checkout totals as right-aligned summary lines.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn totals(out: &mut impl io::Write, totals: &Totals) -> Result<(), CliError> {
    let delivery = if totals.delivery_fee.is_zero() {
        "FREE  ".to_string()
    } else {
        format!("{}  ", format_amount(totals.delivery_fee))
    };

    let lines = [
        (" Subtotal:".to_string(), format!("{}  ", format_amount(totals.subtotal))),
        (" Delivery:".to_string(), delivery),
        (" Platform fee:".to_string(), format!("{}  ", format_amount(totals.platform_fee))),
        (" Tax:".to_string(), format!("{}  ", format_amount(totals.tax))),
        (
            " \x1b[1mTotal:\x1b[0m".to_string(),
            format!("\x1b[1m{}  \x1b[0m", format_amount(totals.total)),
        ),
    ];

    let label_width = lines
        .iter()
        .map(|(label, _)| visible_width(label))
        .max()
        .unwrap_or_default();

    let value_width = lines
        .iter()
        .map(|(_, value)| visible_width(value))
        .max()
        .unwrap_or_default();

    for (label, value) in &lines {
        write_summary_line(out, label, value, label_width, value_width)?;
    }

    writeln!(out)?;

    Ok(())
}

/// Write order history statistics and the order list.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn order_history(
    out: &mut impl io::Write,
    orders: &[Order],
    history: &OrderHistory<'_>,
) -> Result<(), CliError> {
    if orders.is_empty() {
        writeln!(out, "You have not placed any orders yet.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{} order(s), {} spent",
        history.total_orders,
        format_amount(history.total_spent)
    )?;

    let mut builder = Builder::default();
    builder.push_record(["Order", "Placed", "Items", "Status", "Total"]);

    for order in orders {
        builder.push_record([
            format!("#{}", order.id),
            placed_at(order.placed_at()),
            order.total_items().to_string(),
            order.status.label().to_string(),
            format_amount(order.total_amount),
        ]);
    }

    write_table(out, builder, Columns::new(2..5))
}

/// Write a single order.
///
/// # Errors
///
/// Returns [`CliError::Pricing`] if a line total overflows, or
/// [`CliError::Io`] if writing fails.
pub fn order(out: &mut impl io::Write, order: &Order) -> Result<(), CliError> {
    writeln!(out, "Order #{} · {}", order.id, order.status.label())?;
    writeln!(out, "Placed: {}", placed_at(order.placed_at()))?;

    if let Some(address) = &order.delivery_address {
        writeln!(out, "Deliver to: {address}")?;
    }

    if let Some(method) = order.payment_method {
        writeln!(out, "Payment: {method}")?;
    }

    if !order.items.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Item", "Qty", "Total"]);

        for item in &order.items {
            builder.push_record([
                item_label(&item.food.name, &item.ingredients),
                item.quantity.to_string(),
                format_amount(item.line_total()?),
            ]);
        }

        write_table(out, builder, Columns::new(1..3))?;
    }

    writeln!(out, "Total: {}", format_amount(order.total_amount))?;

    Ok(())
}

/// Write a user profile.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn profile(out: &mut impl io::Write, user: &User) -> Result<(), CliError> {
    writeln!(out, "{} <{}>", user.full_name, user.email)?;
    writeln!(out, "Role: {}", role_label(user.role))?;

    if let Some(phone) = &user.phone {
        writeln!(out, "Phone: {phone}")?;
    }

    if let Some(address) = &user.address {
        writeln!(out, "Address: {address}")?;
    }

    Ok(())
}

/// Human-readable role name.
#[must_use]
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Customer => "Customer",
        Role::RestaurantOwner => "Restaurant owner",
        Role::Admin => "Admin",
        Role::Unknown => "Unknown",
    }
}

fn placed_at(timestamp: Option<Timestamp>) -> String {
    timestamp.map_or_else(
        || "-".to_string(),
        |timestamp| timestamp.strftime("%d %b %Y %H:%M UTC").to_string(),
    )
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    amount_columns: Columns<Range<usize>>,
) -> Result<(), CliError> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(amount_columns, Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Returns the visible (non-ANSI) width of a string.
fn visible_width(s: &str) -> usize {
    let mut width = 0usize;
    let mut in_escape = false;

    for ch in s.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }

    width
}

/// Writes a summary line with a right-aligned label and a fixed-width value column.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
    value_col_width: usize,
) -> Result<(), CliError> {
    let label_pad = label_col_width.saturating_sub(visible_width(label));
    let value_pad = value_col_width.saturating_sub(visible_width(value));

    writeln!(
        out,
        "{:>label_pad$}{label}  {value_pad}{value}",
        "",
        value_pad = " ".repeat(value_pad)
    )?;

    Ok(())
}
