//! `morsel restaurants` and `morsel foods`

use std::io;

use clap::{Args, Subcommand};
use morsel::{
    foods::group_by_category,
    ids::Id,
    restaurants::{RestaurantFilter, RestaurantSort},
};
use morsel_client::context::AppContext;

use crate::{commands::found, errors::CliError, render};

const RESTAURANT_NOT_FOUND: &str = "Restaurant not found.";
const FOOD_NOT_FOUND: &str = "Menu item not found.";

#[derive(Debug, Subcommand)]
pub enum RestaurantsCommand {
    /// List restaurants
    List(ListArgs),

    /// Show a restaurant and its menu
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which restaurants to show (all, open, fast)
    #[arg(long, default_value = "all")]
    filter: RestaurantFilter,

    /// Ordering (name, rating, delivery)
    #[arg(long, default_value = "name")]
    sort: RestaurantSort,

    /// Search restaurants by keyword
    #[arg(long, conflicts_with = "city")]
    search: Option<String>,

    /// Only restaurants in this city
    #[arg(long)]
    city: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Restaurant id
    id: u64,

    /// Only show this menu category
    #[arg(long)]
    category: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum FoodsCommand {
    /// Search menu items by name
    Search {
        /// Name to search for
        name: String,
    },

    /// Show a single menu item
    Show {
        /// Food id
        id: u64,
    },
}

pub(crate) async fn run(
    context: &AppContext,
    command: RestaurantsCommand,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match command {
        RestaurantsCommand::List(args) => list(context, args, out).await,
        RestaurantsCommand::Show(args) => show(context, args, out).await,
    }
}

async fn list(
    context: &AppContext,
    args: ListArgs,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let ListArgs {
        filter,
        sort,
        search,
        city,
    } = args;

    let store = &context.restaurants;

    match (search, city) {
        (Some(keyword), _) => store.search(&keyword).await?,
        (None, Some(city)) => store.fetch_by_city(&city).await?,
        (None, None) => store.fetch_all().await?,
    }

    store.read(|resource| {
        let state = resource.data();

        if let Some(keyword) = &state.keyword {
            writeln!(out, "Results for \"{keyword}\"")?;
        }

        render::restaurants(out, &state.listing(filter, sort))
    })
}

async fn show(
    context: &AppContext,
    args: ShowArgs,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let ShowArgs { id, category } = args;
    let id = Id::new(id);

    let (restaurant, menu) = tokio::join!(
        context.restaurants.fetch_by_id(id),
        context.foods.fetch_by_restaurant(id),
    );

    if !found(restaurant)? {
        writeln!(out, "{RESTAURANT_NOT_FOUND}")?;
        return Ok(());
    }

    let mut has_menu = found(menu)?;

    if let Some(category) = category {
        has_menu = found(context.foods.fetch_by_category(id, &category).await)?;
    }

    context.restaurants.read(|resource| match &resource.data().current {
        Some(restaurant) => render::restaurant(out, restaurant),
        None => {
            writeln!(out, "{RESTAURANT_NOT_FOUND}")?;
            Ok(())
        }
    })?;

    if !has_menu {
        return render::menu(out, &[]);
    }

    context.foods.read(|resource| {
        let state = resource.data();

        if !state.categories.is_empty() {
            writeln!(out, "Categories: {}", state.categories.join(", "))?;
        }

        render::menu(out, &group_by_category(&state.foods))
    })
}

pub(crate) async fn run_foods(
    context: &AppContext,
    command: FoodsCommand,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match command {
        FoodsCommand::Search { name } => {
            context.foods.search(&name).await?;

            context
                .foods
                .read(|resource| render::foods(out, &resource.data().search_results))
        }
        FoodsCommand::Show { id } => {
            if !found(context.foods.fetch_by_id(Id::new(id)).await)? {
                writeln!(out, "{FOOD_NOT_FOUND}")?;
                return Ok(());
            }

            context.foods.read(|resource| match &resource.data().current {
                Some(food) => render::foods(out, std::slice::from_ref(food)),
                None => {
                    writeln!(out, "{FOOD_NOT_FOUND}")?;
                    Ok(())
                }
            })
        }
    }
}
