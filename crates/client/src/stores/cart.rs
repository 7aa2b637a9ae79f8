//! Cart store.
//!
//! Every operation replaces the whole cart with the snapshot the server
//! returns. All operations share one channel, so the newest request wins.

use std::{fmt, sync::Arc};

use morsel::{
    carts::{AddCartItem, Cart, CartItemId, QuantityChange, UpdateCartItem},
    pricing::{PricingError, Totals},
    store::Resource,
    validation::validate_quantity,
};

use crate::{
    errors::ClientError,
    services::CartService,
    stores::{Slice, StoreError},
};

/// Cart store.
pub struct CartStore {
    service: Arc<dyn CartService>,
    slice: Slice<Cart, ()>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("slice", &self.slice)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    #[must_use]
    pub fn new(service: Arc<dyn CartService>) -> Self {
        Self {
            service,
            slice: Slice::new("cart", Cart::default()),
        }
    }

    /// Read the slice.
    pub fn read<R>(&self, read: impl FnOnce(&Resource<Cart, ()>) -> R) -> R {
        self.slice.read(read)
    }

    /// Dismiss the current error.
    pub fn clear_error(&self) {
        self.slice.clear_error();
    }

    /// Checkout totals for the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the arithmetic exceeds the decimal range.
    pub fn totals(&self) -> Result<Totals, PricingError> {
        self.read(|resource| resource.data().totals())
    }

    /// Load the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch(&self) -> Result<(), StoreError> {
        self.replace_with(self.service.get()).await
    }

    /// Add a food.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for a zero quantity, or
    /// [`StoreError::Request`] if the request fails.
    pub async fn add(&self, item: AddCartItem) -> Result<(), StoreError> {
        validate_quantity(item.quantity)?;

        self.replace_with(self.service.add(item)).await
    }

    /// Set a line's quantity. A quantity of zero or less removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn update_quantity(&self, item: CartItemId, quantity: i64) -> Result<(), StoreError> {
        match QuantityChange::requested(quantity) {
            QuantityChange::Set(quantity) => {
                self.replace_with(self.service.update(UpdateCartItem {
                    cart_item_id: item,
                    quantity,
                }))
                .await
            }
            QuantityChange::Remove => self.remove(item).await,
        }
    }

    /// Change a line's quantity by `delta`, removing it if the result is below one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInCart`] if the line is not in the current
    /// snapshot, or [`StoreError::Request`] if the request fails.
    pub async fn adjust_quantity(&self, item: CartItemId, delta: i64) -> Result<(), StoreError> {
        let current = self
            .read(|resource| resource.data().item(item).map(|line| line.quantity))
            .ok_or(StoreError::NotInCart(item))?;

        self.update_quantity(item, i64::from(current).saturating_add(delta))
            .await
    }

    /// Remove a line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn remove(&self, item: CartItemId) -> Result<(), StoreError> {
        self.replace_with(self.service.remove(item)).await
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.replace_with(self.service.clear()).await
    }

    async fn replace_with(
        &self,
        request: impl Future<Output = Result<Cart, ClientError>>,
    ) -> Result<(), StoreError> {
        self.slice
            .run((), request, |cart, snapshot| *cart = snapshot)
            .await
            .map_err(StoreError::from)
    }
}
