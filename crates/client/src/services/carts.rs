//! Cart service.
//!
//! Every mutation answers with the full cart snapshot.

use async_trait::async_trait;
use mockall::automock;
use morsel::carts::{AddCartItem, Cart, CartItemId, UpdateCartItem};

use crate::{errors::ClientError, http::ApiClient};

#[derive(Debug, Clone)]
pub struct HttpCartService {
    client: ApiClient,
}

impl HttpCartService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartService for HttpCartService {
    async fn get(&self) -> Result<Cart, ClientError> {
        self.client.get(&["api", "cart"], &[]).await
    }

    async fn add(&self, item: AddCartItem) -> Result<Cart, ClientError> {
        self.client.put(&["api", "cart", "add"], Some(&item)).await
    }

    async fn update(&self, update: UpdateCartItem) -> Result<Cart, ClientError> {
        self.client
            .put(&["api", "cart-item", "update"], Some(&update))
            .await
    }

    async fn remove(&self, item: CartItemId) -> Result<Cart, ClientError> {
        self.client
            .delete(&["api", "cart-item", &item.to_string(), "remove"])
            .await
    }

    async fn clear(&self) -> Result<Cart, ClientError> {
        self.client
            .put::<(), _>(&["api", "cart", "clear"], None)
            .await
    }
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// The signed-in user's cart.
    async fn get(&self) -> Result<Cart, ClientError>;

    /// Add a food to the cart.
    async fn add(&self, item: AddCartItem) -> Result<Cart, ClientError>;

    /// Set a line's quantity. The quantity is always at least one.
    async fn update(&self, update: UpdateCartItem) -> Result<Cart, ClientError>;

    /// Remove a line.
    async fn remove(&self, item: CartItemId) -> Result<Cart, ClientError>;

    /// Remove every line.
    async fn clear(&self) -> Result<Cart, ClientError>;
}
