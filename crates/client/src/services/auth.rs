//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use morsel::users::{AuthResponse, Credentials, ProfileUpdate, Registration, User};

use crate::{errors::ClientError, http::ApiClient};

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn sign_in(&self, credentials: Credentials) -> Result<AuthResponse, ClientError> {
        self.client.post(&["auth", "signin"], &credentials).await
    }

    async fn sign_up(&self, registration: Registration) -> Result<AuthResponse, ClientError> {
        self.client.post(&["auth", "signup"], &registration).await
    }

    async fn profile(&self) -> Result<User, ClientError> {
        self.client.get(&["api", "users", "profile"], &[]).await
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ClientError> {
        self.client
            .put(&["api", "users", "profile"], Some(&update))
            .await
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session token.
    async fn sign_in(&self, credentials: Credentials) -> Result<AuthResponse, ClientError>;

    /// Create an account and sign in.
    async fn sign_up(&self, registration: Registration) -> Result<AuthResponse, ClientError>;

    /// Profile of the signed-in user.
    async fn profile(&self) -> Result<User, ClientError>;

    /// Update the signed-in user's profile.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ClientError>;
}
