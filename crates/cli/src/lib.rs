//! Morsel CLI: a terminal front end for the food-ordering client.

use std::io;

use morsel_client::{config::ApiConfig, context::AppContext};
use tracing::debug;

pub mod commands;
pub mod config;
pub mod errors;
pub mod observability;
pub mod render;

pub use config::Cli;
pub use errors::CliError;

/// Build an application context from `api` and run `command` against it.
///
/// # Errors
///
/// Returns [`CliError`] if the context cannot be built or the command fails.
pub async fn run(
    api: &ApiConfig,
    command: commands::Command,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let context = AppContext::from_config(api)?;

    debug!(api_url = %api.api_url, signed_in = context.session().is_signed_in(), "client ready");

    commands::execute(&context, command, out).await
}
