//! API Config

use clap::Args;
use morsel::secret::Secret;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Settings for reaching the food-ordering API.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Base URL of the food-ordering API
    #[arg(long, env = "MORSEL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Session token from a previous sign-in
    #[arg(long, env = "MORSEL_TOKEN", hide_env_values = true)]
    pub token: Option<Secret>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}
