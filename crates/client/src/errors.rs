//! Client errors.

use morsel::store::Failure;
use thiserror::Error;

/// Errors raised while talking to the API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,

        /// Server-provided message, or a generic one when the body had none
        message: String,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("unexpected response body")]
    Decode(#[source] serde_json::Error),

    /// The configured base URL cannot have path segments appended.
    #[error("invalid API base URL `{0}`")]
    BaseUrl(String),
}

impl ClientError {
    /// Build a status error from a non-2xx response body.
    ///
    /// The body's `message` field is preferred, then its `error` field.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"].into_iter().find_map(|field| {
                    value
                        .get(field)
                        .and_then(serde_json::Value::as_str)
                        .filter(|text| !text.trim().is_empty())
                        .map(str::to_string)
                })
            })
            .unwrap_or_else(|| format!("request failed with status {status}"));

        Self::Status { status, message }
    }
}

impl From<&ClientError> for Failure {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Status { status, message } => Failure::with_status(*status, message),
            other => Failure::new(other.to_string()),
        }
    }
}
