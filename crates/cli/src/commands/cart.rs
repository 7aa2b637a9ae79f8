//! `morsel cart`

use std::io;

use clap::Subcommand;
use morsel::{carts::AddCartItem, ids::Id};
use morsel_client::context::AppContext;

use crate::{commands::require_session, errors::CliError, render};

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show the cart and its totals
    Show,

    /// Add a menu item
    Add {
        /// Food id
        food: u64,

        /// How many to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Extra ingredient (repeatable)
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },

    /// Set a line's quantity; zero or less removes the line
    Set {
        /// Cart line id
        item: u64,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Add one to a line
    Inc {
        /// Cart line id
        item: u64,
    },

    /// Take one from a line, removing it at zero
    Dec {
        /// Cart line id
        item: u64,
    },

    /// Remove a line
    Remove {
        /// Cart line id
        item: u64,
    },

    /// Empty the cart
    Clear,
}

pub(crate) async fn run(
    context: &AppContext,
    command: CartCommand,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    require_session(context)?;

    let cart = &context.cart;

    match command {
        CartCommand::Show => cart.fetch().await?,
        CartCommand::Add {
            food,
            quantity,
            ingredients,
        } => {
            cart.add(AddCartItem {
                food_id: Id::new(food),
                quantity,
                ingredients,
            })
            .await?;
        }
        CartCommand::Set { item, quantity } => cart.update_quantity(Id::new(item), quantity).await?,
        CartCommand::Inc { item } => {
            cart.fetch().await?;
            cart.adjust_quantity(Id::new(item), 1).await?;
        }
        CartCommand::Dec { item } => {
            cart.fetch().await?;
            cart.adjust_quantity(Id::new(item), -1).await?;
        }
        CartCommand::Remove { item } => cart.remove(Id::new(item)).await?,
        CartCommand::Clear => cart.clear().await?,
    }

    cart.read(|resource| render::cart(out, resource.data()))
}
