//! Subcommands.
//!
//! Each command dispatches store operations on an [`AppContext`] and renders
//! the resulting state.

use std::io;

use clap::Subcommand;
use morsel_client::{context::AppContext, stores::StoreError};

use crate::errors::CliError;

pub mod auth;
pub mod cart;
pub mod orders;
pub mod restaurants;

pub use auth::AuthCommand;
pub use cart::CartCommand;
pub use orders::{CheckoutArgs, OrdersCommand};
pub use restaurants::{FoodsCommand, RestaurantsCommand};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in, register or manage your profile
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Browse restaurants and their menus
    Restaurants {
        #[command(subcommand)]
        command: RestaurantsCommand,
    },

    /// Find menu items
    Foods {
        #[command(subcommand)]
        command: FoodsCommand,
    },

    /// View and edit your cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    /// Place an order for everything in the cart
    Checkout(CheckoutArgs),

    /// View your orders
    Orders {
        #[command(subcommand)]
        command: OrdersCommand,
    },
}

/// Run `command` against `context`, writing output to `out`.
///
/// # Errors
///
/// Returns [`CliError`] if a store operation fails or output cannot be written.
pub async fn execute(
    context: &AppContext,
    command: Command,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match command {
        Command::Auth { command } => auth::run(context, command, out).await,
        Command::Restaurants { command } => restaurants::run(context, command, out).await,
        Command::Foods { command } => restaurants::run_foods(context, command, out).await,
        Command::Cart { command } => cart::run(context, command, out).await,
        Command::Checkout(args) => orders::checkout(context, args, out).await,
        Command::Orders { command } => orders::run(context, command, out).await,
    }
}

/// Fail early when a command needs a session and none is held.
pub(crate) fn require_session(context: &AppContext) -> Result<(), CliError> {
    if context.session().is_signed_in() {
        Ok(())
    } else {
        Err(CliError::SignedOut)
    }
}

/// Turn a 404 into `Ok(false)` so the caller can print an empty state.
pub(crate) fn found(result: Result<(), StoreError>) -> Result<bool, StoreError> {
    match result {
        Ok(()) => Ok(true),
        Err(StoreError::Request(failure)) if failure.is_not_found() => Ok(false),
        Err(error) => Err(error),
    }
}
