//! CLI errors

use std::io;

use morsel::pricing::PricingError;
use morsel_client::{errors::ClientError, stores::StoreError};
use thiserror::Error;

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The client could not be constructed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A store operation was blocked or failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Totals could not be calculated.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The command needs a signed-in session.
    #[error("not signed in: run `morsel auth login` and export MORSEL_TOKEN")]
    SignedOut,

    /// Writing output failed.
    #[error("failed to write output")]
    Io(#[from] io::Error),
}
