//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use morsel::orders::{Order, OrderId, PlaceOrder};

use crate::{errors::ClientError, http::ApiClient};

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: ApiClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn place(&self, order: PlaceOrder) -> Result<Order, ClientError> {
        self.client.post(&["api", "order"], &order).await
    }

    async fn mine(&self) -> Result<Vec<Order>, ClientError> {
        self.client.get(&["api", "order", "user"], &[]).await
    }

    async fn by_id(&self, id: OrderId) -> Result<Order, ClientError> {
        self.client
            .get(&["api", "order", &id.to_string()], &[])
            .await
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place an order for the current cart.
    async fn place(&self, order: PlaceOrder) -> Result<Order, ClientError>;

    /// The signed-in user's orders, newest first.
    async fn mine(&self) -> Result<Vec<Order>, ClientError>;

    /// A single order.
    async fn by_id(&self, id: OrderId) -> Result<Order, ClientError>;
}
