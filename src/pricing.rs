//! Pricing
//!
//! Checkout totals derived from a cart subtotal. Totals are always recomputed
//! from the live cart; nothing here is stored.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};
use thiserror::Error;

/// Currency minor-unit precision used for display.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Delivery is always free.
pub const DELIVERY_FEE: Decimal = Decimal::ZERO;

/// Flat platform fee added to every order (5.00).
pub const PLATFORM_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A multiplication or addition exceeded the decimal range.
    #[error("amount overflowed while calculating totals")]
    Overflow,
}

/// Tax rate applied to the subtotal (5%).
#[must_use]
pub fn tax_rate() -> Percentage {
    Percentage::from(Decimal::new(5, 2))
}

/// Currency every amount is displayed in.
#[must_use]
pub fn currency() -> &'static iso::Currency {
    iso::INR
}

/// Checkout totals for a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of unit price × quantity over cart items
    pub subtotal: Decimal,

    /// Delivery fee (always zero)
    pub delivery_fee: Decimal,

    /// Flat platform fee
    pub platform_fee: Decimal,

    /// Tax on the subtotal
    pub tax: Decimal,

    /// Amount payable
    pub total: Decimal,
}

impl Totals {
    /// Calculate totals for the given subtotal.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the arithmetic exceeds the decimal range.
    pub fn from_subtotal(subtotal: Decimal) -> Result<Self, PricingError> {
        let rate = tax_rate() * Decimal::ONE;

        let tax = subtotal.checked_mul(rate).ok_or(PricingError::Overflow)?;

        let total = [DELIVERY_FEE, PLATFORM_FEE, tax]
            .into_iter()
            .try_fold(subtotal, Decimal::checked_add)
            .ok_or(PricingError::Overflow)?;

        Ok(Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            platform_fee: PLATFORM_FEE,
            tax,
            total,
        })
    }
}

/// Sum `amounts`, failing on overflow.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the sum exceeds the decimal range.
pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, PricingError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or(PricingError::Overflow)
}

/// Multiply a unit price by a quantity, failing on overflow.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product exceeds the decimal range.
pub fn line_total(unit_price: Decimal, quantity: u32) -> Result<Decimal, PricingError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or(PricingError::Overflow)
}

/// Round an amount for display: half away from zero, to the minor unit.
#[must_use]
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Amount as money in the display currency, rounded for display.
#[must_use]
pub fn money(amount: Decimal) -> Money<'static, iso::Currency> {
    Money::from_decimal(round_for_display(amount), currency())
}

/// Format an amount for display, e.g. `₹262.50`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    money(amount).to_string()
}
