//! Restaurants service.

use async_trait::async_trait;
use mockall::automock;
use morsel::restaurants::{Restaurant, RestaurantId};

use crate::{errors::ClientError, http::ApiClient};

#[derive(Debug, Clone)]
pub struct HttpRestaurantsService {
    client: ApiClient,
}

impl HttpRestaurantsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RestaurantsService for HttpRestaurantsService {
    async fn all(&self) -> Result<Vec<Restaurant>, ClientError> {
        self.client.get(&["api", "restaurants"], &[]).await
    }

    async fn by_id(&self, id: RestaurantId) -> Result<Restaurant, ClientError> {
        self.client
            .get(&["api", "restaurants", &id.to_string()], &[])
            .await
    }

    async fn search(&self, keyword: String) -> Result<Vec<Restaurant>, ClientError> {
        self.client
            .get(&["api", "restaurants", "search"], &[("keyword", keyword.as_str())])
            .await
    }

    async fn by_city(&self, city: String) -> Result<Vec<Restaurant>, ClientError> {
        self.client
            .get(&["api", "restaurants", "city", &city], &[])
            .await
    }
}

#[automock]
#[async_trait]
pub trait RestaurantsService: Send + Sync {
    /// Every restaurant.
    async fn all(&self) -> Result<Vec<Restaurant>, ClientError>;

    /// A single restaurant.
    async fn by_id(&self, id: RestaurantId) -> Result<Restaurant, ClientError>;

    /// Restaurants matching a keyword.
    async fn search(&self, keyword: String) -> Result<Vec<Restaurant>, ClientError>;

    /// Restaurants in a city.
    async fn by_city(&self, city: String) -> Result<Vec<Restaurant>, ClientError>;
}
