//! App Context

use std::{fmt, sync::Arc};

use crate::{
    config::ApiConfig,
    errors::ClientError,
    http::{ApiClient, Session},
    services::{
        AuthService, CartService, FoodsService, HttpAuthService, HttpCartService,
        HttpFoodsService, HttpOrdersService, HttpRestaurantsService, OrdersService,
        RestaurantsService,
    },
    stores::{AuthStore, CartStore, FoodStore, OrderStore, RestaurantStore},
};

/// One service per resource.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub restaurants: Arc<dyn RestaurantsService>,
    pub foods: Arc<dyn FoodsService>,
    pub cart: Arc<dyn CartService>,
    pub orders: Arc<dyn OrdersService>,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

impl Services {
    /// HTTP services sharing `client`, and so its session.
    #[must_use]
    pub fn http(client: &ApiClient) -> Self {
        Self {
            auth: Arc::new(HttpAuthService::new(client.clone())),
            restaurants: Arc::new(HttpRestaurantsService::new(client.clone())),
            foods: Arc::new(HttpFoodsService::new(client.clone())),
            cart: Arc::new(HttpCartService::new(client.clone())),
            orders: Arc::new(HttpOrdersService::new(client.clone())),
        }
    }
}

/// Every store, wired to the same session.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub auth: Arc<AuthStore>,
    pub restaurants: Arc<RestaurantStore>,
    pub foods: Arc<FoodStore>,
    pub cart: Arc<CartStore>,
    pub orders: Arc<OrderStore>,
    session: Session,
}

impl AppContext {
    /// Build stores over `services`.
    #[must_use]
    pub fn new(services: Services, session: Session) -> Self {
        Self {
            auth: Arc::new(AuthStore::new(services.auth, session.clone())),
            restaurants: Arc::new(RestaurantStore::new(services.restaurants)),
            foods: Arc::new(FoodStore::new(services.foods)),
            cart: Arc::new(CartStore::new(services.cart)),
            orders: Arc::new(OrderStore::new(services.orders)),
            session,
        }
    }

    /// Build application context talking to the configured API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrl`] if the API URL is unusable.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = ApiClient::new(config)?;
        let session = client.session().clone();

        Ok(Self::new(Services::http(&client), session))
    }

    /// Session shared by every store and service.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use morsel::{
        secret::Secret,
        users::{AuthResponse, Credentials, Role},
    };
    use testresult::TestResult;

    use crate::services::{
        MockAuthService, MockCartService, MockFoodsService, MockOrdersService,
        MockRestaurantsService,
    };

    use super::*;

    fn services(auth: MockAuthService) -> Services {
        Services {
            auth: Arc::new(auth),
            restaurants: Arc::new(MockRestaurantsService::new()),
            foods: Arc::new(MockFoodsService::new()),
            cart: Arc::new(MockCartService::new()),
            orders: Arc::new(MockOrdersService::new()),
        }
    }

    #[test]
    fn configured_token_signs_in_every_store() -> TestResult {
        let context = AppContext::from_config(&ApiConfig {
            token: Some(Secret::new("saved")),
            ..ApiConfig::default()
        })?;

        assert!(context.auth.is_signed_in());
        assert!(context.session().is_signed_in());

        Ok(())
    }

    #[test]
    fn unusable_api_url_is_reported() {
        let result = AppContext::from_config(&ApiConfig {
            api_url: "::".to_string(),
            token: None,
        });

        assert!(matches!(result, Err(ClientError::BaseUrl(_))));
    }

    #[tokio::test]
    async fn sign_in_updates_shared_session() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_sign_in().returning(|_| {
            Ok(AuthResponse {
                jwt: Secret::new("fresh"),
                message: None,
                role: Role::Customer,
            })
        });

        let session = Session::default();
        let context = AppContext::new(services(auth), session);

        context
            .auth
            .sign_in(Credentials {
                email: "asha@example.com".to_string(),
                password: Secret::new("hunter22"),
            })
            .await?;

        let clone = context.clone();

        assert_eq!(
            clone.session().token().as_ref().map(Secret::expose),
            Some("fresh")
        );

        Ok(())
    }
}
