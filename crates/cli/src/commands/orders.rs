//! `morsel checkout` and `morsel orders`

use std::io;

use clap::{Args, Subcommand};
use morsel::{
    addresses::{Address, DEFAULT_COUNTRY},
    ids::Id,
    orders::{PaymentMethod, PlaceOrder},
};
use morsel_client::context::AppContext;
use tracing::info;

use crate::{
    commands::{found, require_session},
    errors::CliError,
    render,
};

const ORDER_NOT_FOUND: &str = "Order not found.";

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List your orders
    List,

    /// Show one order
    Show {
        /// Order id
        id: u64,
    },
}

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Street address
    #[arg(long)]
    street: String,

    /// City
    #[arg(long)]
    city: String,

    /// State or province
    #[arg(long, default_value = "")]
    state: String,

    /// Postal code
    #[arg(long, default_value = "")]
    postal_code: String,

    /// Country
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Payment method (card, wallet, cod)
    #[arg(long, default_value = "card")]
    payment: PaymentMethod,
}

impl CheckoutArgs {
    fn into_order(self) -> PlaceOrder {
        PlaceOrder {
            delivery_address: Address {
                street_address: self.street,
                city: self.city,
                state_province: self.state,
                postal_code: self.postal_code,
                country: self.country,
            },
            payment_method: self.payment,
        }
    }
}

pub(crate) async fn checkout(
    context: &AppContext,
    args: CheckoutArgs,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    require_session(context)?;

    context.cart.fetch().await?;

    let empty = context.cart.read(|resource| resource.data().is_empty());

    if empty {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    context.cart.read(|resource| render::cart(out, resource.data()))?;

    context.orders.place(args.into_order()).await?;

    let placed = context.orders.read(|resource| {
        let state = resource.data();

        match &state.current {
            Some(order) if state.placed => {
                writeln!(out, "Order placed.")?;
                render::order(out, order)?;
                Ok::<_, CliError>(Some(order.id))
            }
            _ => Ok(None),
        }
    })?;

    if let Some(id) = placed {
        info!(order = %id, "order placed");

        context.cart.fetch().await?;
        context.cart.read(|resource| render::cart(out, resource.data()))?;
    }

    Ok(())
}

pub(crate) async fn run(
    context: &AppContext,
    command: OrdersCommand,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    require_session(context)?;

    match command {
        OrdersCommand::List => {
            context.orders.fetch_mine().await?;

            context.orders.read(|resource| {
                let state = resource.data();

                render::order_history(out, &state.orders, &state.history()?)
            })
        }
        OrdersCommand::Show { id } => {
            if !found(context.orders.fetch_by_id(Id::new(id)).await)? {
                writeln!(out, "{ORDER_NOT_FOUND}")?;
                return Ok(());
            }

            context.orders.read(|resource| match &resource.data().current {
                Some(order) => render::order(out, order),
                None => {
                    writeln!(out, "{ORDER_NOT_FOUND}")?;
                    Ok(())
                }
            })
        }
    }
}
