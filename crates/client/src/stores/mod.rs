//! Resource stores.
//!
//! Each store owns one slice of server-derived state behind a mutex. Async
//! operations start a request on a channel, await the service, then settle the
//! outcome. The lock is never held across an `.await`.

use std::{
    fmt::Debug,
    hash::Hash,
    sync::{Mutex, MutexGuard, PoisonError},
};

use morsel::{
    carts::CartItemId,
    store::{Failure, Resource, Ticket},
    validation::ValidationError,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::ClientError;

pub mod auth;
pub mod cart;
pub mod foods;
pub mod orders;
pub mod restaurants;

pub use auth::{AuthChannel, AuthState, AuthStore};
pub use cart::CartStore;
pub use foods::{FoodChannel, FoodStore, FoodsState};
pub use orders::{OrderChannel, OrderStore, OrdersState};
pub use restaurants::{RestaurantChannel, RestaurantStore, RestaurantsState};

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request was blocked by client-side validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The request was sent and failed.
    #[error(transparent)]
    Request(#[from] Failure),

    /// The cart line is not in the current cart snapshot.
    #[error("cart item {0} is not in the cart")]
    NotInCart(CartItemId),
}

/// A store's state plus the request bookkeeping around it.
#[derive(Debug)]
pub(crate) struct Slice<T, K> {
    name: &'static str,
    state: Mutex<Resource<T, K>>,
}

impl<T, K> Slice<T, K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub(crate) fn new(name: &'static str, data: T) -> Self {
        Self {
            name,
            state: Mutex::new(Resource::new(data)),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Resource<T, K>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn read<R>(&self, read: impl FnOnce(&Resource<T, K>) -> R) -> R {
        read(&self.lock())
    }

    pub(crate) fn update(&self, apply: impl FnOnce(&mut T)) {
        self.lock().update(apply);
    }

    pub(crate) fn clear_error(&self) {
        self.lock().clear_error();
    }

    /// Begin a request on `channel`, applying `prepare` under the same lock.
    pub(crate) fn start(&self, channel: K, prepare: impl FnOnce(&mut T)) -> Ticket<K> {
        let mut state = self.lock();
        let ticket = state.begin(channel);

        state.update(prepare);

        debug!(store = self.name, ?channel, "request started");

        ticket
    }

    /// Settle a request started with [`Slice::start`].
    pub(crate) fn settle<R>(
        &self,
        ticket: Ticket<K>,
        result: Result<R, ClientError>,
        apply: impl FnOnce(&mut T, R),
    ) -> Result<(), Failure> {
        let channel = ticket.channel();

        match result {
            Ok(value) => {
                if self.lock().fulfil(ticket, |data| apply(data, value)) {
                    debug!(store = self.name, ?channel, "request fulfilled");
                } else {
                    debug!(store = self.name, ?channel, "discarding superseded response");
                }

                Ok(())
            }
            Err(error) => {
                let failure = Failure::from(&error);

                if self.lock().reject(ticket, failure.clone()) {
                    warn!(store = self.name, ?channel, "request failed: {error}");
                } else {
                    debug!(store = self.name, ?channel, "discarding superseded failure: {error}");
                }

                Err(failure)
            }
        }
    }

    /// Start a request, await it and settle the outcome.
    pub(crate) async fn run<R>(
        &self,
        channel: K,
        request: impl Future<Output = Result<R, ClientError>>,
        apply: impl FnOnce(&mut T, R),
    ) -> Result<(), Failure> {
        let ticket = self.start(channel, |_| {});

        self.settle(ticket, request.await, apply)
    }
}
