//! Validation
//!
//! Checks run before a request is dispatched. A failed check blocks the request.

use thiserror::Error;

use crate::{
    addresses::Address,
    users::{Credentials, Registration},
};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Errors raised by client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are blank.
    #[error("please fill in all fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The password is shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),

    /// Checkout needs a street address and a city.
    #[error("please provide a complete delivery address")]
    MissingDeliveryAddress,

    /// A search keyword is blank.
    #[error("search keyword must not be empty")]
    EmptyKeyword,

    /// A food was added with a quantity of zero.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// Check sign-in credentials.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] if the email or password is blank.
pub fn validate_sign_in(credentials: &Credentials) -> Result<(), ValidationError> {
    let missing = missing_fields([
        ("email", credentials.email.trim().is_empty()),
        ("password", credentials.password.is_empty()),
    ]);

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Check a registration against its password confirmation.
///
/// # Errors
///
/// Returns the first failing check: blank fields, mismatched confirmation,
/// then password length.
pub fn validate_registration(
    registration: &Registration,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    let missing = missing_fields([
        ("full name", registration.full_name.trim().is_empty()),
        ("email", registration.email.trim().is_empty()),
        ("password", registration.password.is_empty()),
        ("confirm password", confirm_password.is_empty()),
    ]);

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if registration.password.expose() != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if registration.password.char_count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Check a delivery address is complete enough to place an order.
///
/// # Errors
///
/// Returns [`ValidationError::MissingDeliveryAddress`] if the street or city is blank.
pub fn validate_delivery_address(address: &Address) -> Result<(), ValidationError> {
    if address.street_address.trim().is_empty() || address.city.trim().is_empty() {
        return Err(ValidationError::MissingDeliveryAddress);
    }

    Ok(())
}

/// Trim a search keyword, rejecting blank input.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyKeyword`] if nothing remains after trimming.
pub fn normalize_keyword(keyword: &str) -> Result<&str, ValidationError> {
    let keyword = keyword.trim();

    if keyword.is_empty() {
        Err(ValidationError::EmptyKeyword)
    } else {
        Ok(keyword)
    }
}

/// Check a quantity being added to the cart.
///
/// # Errors
///
/// Returns [`ValidationError::ZeroQuantity`] if `quantity` is zero.
pub fn validate_quantity(quantity: u32) -> Result<(), ValidationError> {
    if quantity == 0 {
        return Err(ValidationError::ZeroQuantity);
    }

    Ok(())
}

fn missing_fields<const N: usize>(checks: [(&'static str, bool); N]) -> Vec<&'static str> {
    checks
        .into_iter()
        .filter_map(|(name, blank)| blank.then_some(name))
        .collect()
}
