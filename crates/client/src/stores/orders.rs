//! Order store.

use std::{fmt, sync::Arc};

use morsel::{
    orders::{Order, OrderHistory, OrderId, PlaceOrder},
    pricing::PricingError,
    store::Resource,
    validation::validate_delivery_address,
};

use crate::{
    services::OrdersService,
    stores::{Slice, StoreError},
};

/// Parts of the order slice a request can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderChannel {
    /// Placing a new order.
    Place,

    /// The user's order history.
    History,

    /// The order being viewed.
    Current,
}

/// Order slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersState {
    /// Order history, newest first
    pub orders: Vec<Order>,

    /// Order being viewed, or the one just placed
    pub current: Option<Order>,

    /// True only after an order was placed successfully
    pub placed: bool,
}

impl OrdersState {
    /// Order count, total spent and recent orders.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total spent exceeds the decimal range.
    pub fn history(&self) -> Result<OrderHistory<'_>, PricingError> {
        OrderHistory::from_orders(&self.orders)
    }
}

/// Order store.
pub struct OrderStore {
    service: Arc<dyn OrdersService>,
    slice: Slice<OrdersState, OrderChannel>,
}

impl fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderStore")
            .field("slice", &self.slice)
            .finish_non_exhaustive()
    }
}

impl OrderStore {
    #[must_use]
    pub fn new(service: Arc<dyn OrdersService>) -> Self {
        Self {
            service,
            slice: Slice::new("order", OrdersState::default()),
        }
    }

    /// Read the slice.
    pub fn read<R>(&self, read: impl FnOnce(&Resource<OrdersState, OrderChannel>) -> R) -> R {
        self.slice.read(read)
    }

    /// Dismiss the current error.
    pub fn clear_error(&self) {
        self.slice.clear_error();
    }

    /// Place an order. On success it is prepended to the history and becomes
    /// the current order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for an incomplete delivery address, or
    /// [`StoreError::Request`] if the request fails.
    pub async fn place(&self, order: PlaceOrder) -> Result<(), StoreError> {
        validate_delivery_address(&order.delivery_address)?;

        let ticket = self
            .slice
            .start(OrderChannel::Place, |state| state.placed = false);

        let result = self.service.place(order).await;

        self.slice
            .settle(ticket, result, |state, order| {
                state.current = Some(order.clone());
                state.orders.insert(0, order);
                state.placed = true;
            })
            .map_err(StoreError::from)
    }

    /// Load the user's order history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch_mine(&self) -> Result<(), StoreError> {
        self.slice
            .run(OrderChannel::History, self.service.mine(), |state, orders| {
                state.orders = orders;
            })
            .await
            .map_err(StoreError::from)
    }

    /// Load a single order as the current one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch_by_id(&self, id: OrderId) -> Result<(), StoreError> {
        self.slice
            .run(OrderChannel::Current, self.service.by_id(id), |state, order| {
                state.current = Some(order);
            })
            .await
            .map_err(StoreError::from)
    }

    /// Forget the current order.
    pub fn clear_current(&self) {
        self.slice.update(|state| state.current = None);
    }

    /// Reset the placed flag.
    pub fn reset_placed(&self) {
        self.slice.update(|state| state.placed = false);
    }
}
