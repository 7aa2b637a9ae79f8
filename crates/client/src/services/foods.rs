//! Foods service.

use async_trait::async_trait;
use mockall::automock;
use morsel::{
    foods::{Food, FoodId},
    restaurants::RestaurantId,
};

use crate::{errors::ClientError, http::ApiClient};

#[derive(Debug, Clone)]
pub struct HttpFoodsService {
    client: ApiClient,
}

impl HttpFoodsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FoodsService for HttpFoodsService {
    async fn by_restaurant(&self, restaurant: RestaurantId) -> Result<Vec<Food>, ClientError> {
        self.client
            .get(&["api", "food", "restaurant", &restaurant.to_string()], &[])
            .await
    }

    async fn by_category(
        &self,
        restaurant: RestaurantId,
        category: String,
    ) -> Result<Vec<Food>, ClientError> {
        self.client
            .get(
                &[
                    "api",
                    "food",
                    "restaurant",
                    &restaurant.to_string(),
                    "category",
                    &category,
                ],
                &[],
            )
            .await
    }

    async fn search(&self, name: String) -> Result<Vec<Food>, ClientError> {
        self.client
            .get(&["api", "food", "search"], &[("name", name.as_str())])
            .await
    }

    async fn by_id(&self, id: FoodId) -> Result<Food, ClientError> {
        self.client
            .get(&["api", "food", &id.to_string()], &[])
            .await
    }
}

#[automock]
#[async_trait]
pub trait FoodsService: Send + Sync {
    /// A restaurant's menu.
    async fn by_restaurant(&self, restaurant: RestaurantId) -> Result<Vec<Food>, ClientError>;

    /// A restaurant's menu, narrowed to one category.
    async fn by_category(
        &self,
        restaurant: RestaurantId,
        category: String,
    ) -> Result<Vec<Food>, ClientError>;

    /// Foods whose name matches.
    async fn search(&self, name: String) -> Result<Vec<Food>, ClientError>;

    /// A single food.
    async fn by_id(&self, id: FoodId) -> Result<Food, ClientError>;
}
