//! HTTP client wrapper.
//!
//! Every request carries an `x-request-id` header and, while a session token
//! is held, an `Authorization: Bearer` header. A 2xx body is decoded as the
//! payload. Anything else becomes [`ClientError::Status`].

use std::sync::{Arc, PoisonError, RwLock};

use morsel::secret::Secret;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{config::ApiConfig, errors::ClientError};

/// Header carrying a per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Session token shared between the HTTP client and the auth store.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<Secret>>>,
}

impl Session {
    /// Session already holding `token`.
    #[must_use]
    pub fn with_token(token: Secret) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// Current token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<Secret> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns true while a token is held.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the token.
    pub fn set(&self, token: Secret) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Drop the token.
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// JSON-over-HTTP client for the food-ordering API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
    session: Session,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrl`] if the configured URL does not parse
    /// or cannot carry path segments.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.api_url)
            .map_err(|source| ClientError::BaseUrl(format!("{}: {source}", config.api_url)))?;

        if base.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(config.api_url.clone()));
        }

        let session = config
            .token
            .clone()
            .map(Session::with_token)
            .unwrap_or_default();

        Ok(Self {
            base,
            http: Client::new(),
            session,
        })
    }

    /// Session shared by every request made through this client.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `GET` a path with optional query parameters.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn get<T>(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::GET, segments, |request| request.query(query))
            .await
    }

    /// `POST` a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, segments, |request| request.json(body))
            .await
    }

    /// `PUT` an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn put<B, T>(&self, segments: &[&str], body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, segments, |request| match body {
            Some(body) => request.json(body),
            None => request,
        })
        .await
    }

    /// `DELETE` a path.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn delete<T>(&self, segments: &[&str]) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::DELETE, segments, |request| request)
            .await
    }

    /// Append percent-encoded path segments to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrl`] if the base URL cannot carry a path.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ClientError::BaseUrl(self.base.to_string()))?;

            path.pop_if_empty().extend(segments);
        }

        Ok(url)
    }

    async fn execute<T>(
        &self,
        method: Method,
        segments: &[&str],
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let request_id = Uuid::now_v7().to_string();

        debug!(%method, path = url.path(), %request_id, "sending request");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(REQUEST_ID_HEADER, &request_id);

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token.expose());
        }

        let response = build(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = ClientError::from_status(status.as_u16(), &body);

            warn!(%method, path = url.path(), %request_id, status = status.as_u16(), "request failed: {error}");

            return Err(error);
        }

        let bytes = response.bytes().await?;

        debug!(%method, path = url.path(), %request_id, status = status.as_u16(), "request succeeded");

        serde_json::from_slice(&bytes).map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn client(api_url: &str) -> Result<ApiClient, ClientError> {
        ApiClient::new(&ApiConfig {
            api_url: api_url.to_string(),
            token: None,
        })
    }

    #[test]
    fn joins_segments_onto_base_path() -> TestResult {
        let client = client("http://localhost:8080/")?;

        let url = client.url(&["api", "restaurants", "42"])?;

        assert_eq!(url.as_str(), "http://localhost:8080/api/restaurants/42");

        Ok(())
    }

    #[test]
    fn keeps_base_path_prefix() -> TestResult {
        let client = client("https://food.example.com/v1")?;

        let url = client.url(&["api", "cart"])?;

        assert_eq!(url.as_str(), "https://food.example.com/v1/api/cart");

        Ok(())
    }

    #[test]
    fn percent_encodes_path_segments() -> TestResult {
        let client = client("http://localhost:8080")?;

        let url = client.url(&["api", "restaurants", "city", "New Delhi/NCR"])?;

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/restaurants/city/New%20Delhi%2FNCR"
        );

        Ok(())
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(client("not a url"), Err(ClientError::BaseUrl(_))));
        assert!(matches!(
            client("mailto:orders@example.com"),
            Err(ClientError::BaseUrl(_))
        ));
    }

    #[test]
    fn session_token_round_trip() {
        let session = Session::default();

        assert!(!session.is_signed_in());

        session.set(Secret::new("jwt"));
        assert_eq!(session.token().as_ref().map(Secret::expose), Some("jwt"));

        session.clear();
        assert!(session.token().is_none());
    }

    #[test]
    fn configured_token_starts_session() -> TestResult {
        let client = ApiClient::new(&ApiConfig {
            api_url: "http://localhost:8080".to_string(),
            token: Some(Secret::new("saved")),
        })?;

        assert!(client.session().is_signed_in());

        Ok(())
    }
}
