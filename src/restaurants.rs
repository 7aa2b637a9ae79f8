//! Restaurants
//!
//! Read-only restaurant projections and the pure filter/sort selectors used to
//! render restaurant lists.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{addresses::Address, ids::Id};

/// Rating shown and sorted on when a restaurant has none.
pub const DEFAULT_RATING: f64 = 4.5;

/// Delivery time in minutes assumed when a restaurant has none.
pub const DEFAULT_DELIVERY_MINUTES: u32 = 30;

/// Restaurants delivering within this many minutes count as fast.
pub const FAST_DELIVERY_MINUTES: u32 = 30;

/// Width of the delivery window shown to customers, in minutes.
pub const DELIVERY_WINDOW_MINUTES: u32 = 15;

/// Restaurant Id
pub type RestaurantId = Id<Restaurant>;

/// Restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Server id
    pub id: RestaurantId,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Cuisine, e.g. "North Indian"
    #[serde(default)]
    pub cuisine_type: Option<String>,

    /// Whether the restaurant is currently accepting orders
    #[serde(default)]
    pub open: bool,

    /// Average rating
    #[serde(default)]
    pub rating: Option<f64>,

    /// Typical delivery time in minutes
    #[serde(default)]
    pub delivery_time: Option<u32>,

    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,

    /// Street address
    #[serde(default)]
    pub address: Option<Address>,
}

impl Restaurant {
    /// Rating, substituting [`DEFAULT_RATING`] when absent. A zero rating
    /// means no reviews yet and is treated as absent.
    #[must_use]
    pub fn rating_or_default(&self) -> f64 {
        self.rating
            .filter(|rating| *rating > 0.0)
            .unwrap_or(DEFAULT_RATING)
    }

    /// Delivery time, substituting [`DEFAULT_DELIVERY_MINUTES`] when absent.
    #[must_use]
    pub fn delivery_minutes_or_default(&self) -> u32 {
        self.delivery_time.unwrap_or(DEFAULT_DELIVERY_MINUTES)
    }

    /// Delivery window as `(earliest, latest)` minutes.
    #[must_use]
    pub fn delivery_window(&self) -> (u32, u32) {
        let earliest = self.delivery_minutes_or_default();

        (earliest, earliest.saturating_add(DELIVERY_WINDOW_MINUTES))
    }

    /// Returns true if the restaurant has a known delivery time within
    /// [`FAST_DELIVERY_MINUTES`].
    #[must_use]
    pub fn is_fast(&self) -> bool {
        self.delivery_time
            .is_some_and(|minutes| minutes <= FAST_DELIVERY_MINUTES)
    }
}

/// Error returned when a filter or sort name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseListingError {
    kind: &'static str,
    value: String,
}

/// Restaurant list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestaurantFilter {
    /// Every restaurant.
    #[default]
    All,

    /// Only restaurants that are open.
    OpenNow,

    /// Only restaurants delivering within [`FAST_DELIVERY_MINUTES`].
    Fast,
}

impl RestaurantFilter {
    /// Returns true if `restaurant` passes the filter.
    #[must_use]
    pub fn matches(self, restaurant: &Restaurant) -> bool {
        match self {
            Self::All => true,
            Self::OpenNow => restaurant.open,
            Self::Fast => restaurant.is_fast(),
        }
    }
}

impl FromStr for RestaurantFilter {
    type Err = ParseListingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "open" | "open-now" => Ok(Self::OpenNow),
            "fast" => Ok(Self::Fast),
            _ => Err(ParseListingError {
                kind: "filter",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for RestaurantFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::OpenNow => "open",
            Self::Fast => "fast",
        })
    }
}

/// Restaurant list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestaurantSort {
    /// Alphabetical by name.
    #[default]
    Name,

    /// Highest rating first.
    Rating,

    /// Quickest delivery first.
    DeliveryTime,
}

impl RestaurantSort {
    /// Compare two restaurants under this ordering.
    #[must_use]
    pub fn compare(self, a: &Restaurant, b: &Restaurant) -> Ordering {
        match self {
            Self::Name => collate(&a.name, &b.name),
            Self::Rating => b.rating_or_default().total_cmp(&a.rating_or_default()),
            Self::DeliveryTime => a
                .delivery_minutes_or_default()
                .cmp(&b.delivery_minutes_or_default()),
        }
    }
}

impl FromStr for RestaurantSort {
    type Err = ParseListingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "rating" => Ok(Self::Rating),
            "delivery" | "delivery-time" => Ok(Self::DeliveryTime),
            _ => Err(ParseListingError {
                kind: "sort",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for RestaurantSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Rating => "rating",
            Self::DeliveryTime => "delivery",
        })
    }
}

/// Pick the list to display: search results while a keyword is active,
/// otherwise the full restaurant list.
#[must_use]
pub fn display_source<'a>(
    keyword: Option<&str>,
    restaurants: &'a [Restaurant],
    search_results: &'a [Restaurant],
) -> &'a [Restaurant] {
    match keyword {
        Some(keyword) if !keyword.trim().is_empty() => search_results,
        _ => restaurants,
    }
}

/// Filter then sort `restaurants`. The sort is stable.
#[must_use]
pub fn filter_and_sort(
    restaurants: &[Restaurant],
    filter: RestaurantFilter,
    sort: RestaurantSort,
) -> Vec<&Restaurant> {
    let mut listed: Vec<&Restaurant> = restaurants
        .iter()
        .filter(|restaurant| filter.matches(restaurant))
        .collect();

    listed.sort_by(|a, b| sort.compare(a, b));

    listed
}

/// Case-insensitive comparison; lowercase sorts first on ties.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn restaurant(id: u64, name: &str) -> Restaurant {
        Restaurant {
            id: Id::new(id),
            name: name.to_string(),
            description: None,
            cuisine_type: None,
            open: true,
            rating: None,
            delivery_time: None,
            images: Vec::new(),
            address: None,
        }
    }

    fn names(listed: &[&Restaurant]) -> Vec<String> {
        listed.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn fast_filter_requires_known_delivery_time() {
        let mut quick = restaurant(1, "Quick");
        quick.delivery_time = Some(30);

        let mut slow = restaurant(2, "Slow");
        slow.delivery_time = Some(31);

        let unknown = restaurant(3, "Unknown");

        let all = [quick, slow, unknown];
        let listed = filter_and_sort(&all, RestaurantFilter::Fast, RestaurantSort::Name);

        assert_eq!(names(&listed), ["Quick"]);
    }

    #[test]
    fn open_filter_keeps_only_open_restaurants() {
        let mut closed = restaurant(1, "Closed");
        closed.open = false;

        let all = [closed, restaurant(2, "Open")];
        let listed = filter_and_sort(&all, RestaurantFilter::OpenNow, RestaurantSort::Name);

        assert!(listed.iter().all(|r| r.open), "only open restaurants listed");
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn name_sort_ignores_case() {
        let all = [
            restaurant(1, "biryani house"),
            restaurant(2, "Dosa Corner"),
            restaurant(3, "Annapurna"),
        ];

        let listed = filter_and_sort(&all, RestaurantFilter::All, RestaurantSort::Name);

        assert_eq!(
            names(&listed),
            ["Annapurna", "biryani house", "Dosa Corner"]
        );
    }

    #[test]
    fn rating_sort_is_descending_with_default_for_missing() {
        let mut low = restaurant(1, "Low");
        low.rating = Some(3.9);

        let mut high = restaurant(2, "High");
        high.rating = Some(4.8);

        let unrated = restaurant(3, "Unrated");

        let all = [low, unrated, high];
        let listed = filter_and_sort(&all, RestaurantFilter::All, RestaurantSort::Rating);

        assert_eq!(names(&listed), ["High", "Unrated", "Low"]);
    }

    #[test]
    fn zero_rating_counts_as_unrated() {
        let mut fresh = restaurant(1, "Fresh");
        fresh.rating = Some(0.0);

        let mut rated = restaurant(2, "Rated");
        rated.rating = Some(4.2);

        assert!(
            (fresh.rating_or_default() - DEFAULT_RATING).abs() < f64::EPSILON,
            "zero shows the default rating"
        );

        let all = [rated, fresh];
        let listed = filter_and_sort(&all, RestaurantFilter::All, RestaurantSort::Rating);

        assert_eq!(names(&listed), ["Fresh", "Rated"]);
    }

    #[test]
    fn delivery_sort_is_ascending_with_default_for_missing() {
        let mut slow = restaurant(1, "Slow");
        slow.delivery_time = Some(45);

        let mut quick = restaurant(2, "Quick");
        quick.delivery_time = Some(20);

        let unknown = restaurant(3, "Unknown");

        let all = [slow, unknown, quick];
        let listed = filter_and_sort(&all, RestaurantFilter::All, RestaurantSort::DeliveryTime);

        assert_eq!(names(&listed), ["Quick", "Unknown", "Slow"]);
    }

    #[test]
    fn display_source_prefers_search_results_while_searching() {
        let all = [restaurant(1, "A"), restaurant(2, "B")];
        let results = [restaurant(2, "B")];

        assert_eq!(display_source(Some("b"), &all, &results).len(), 1);
        assert_eq!(display_source(Some("  "), &all, &results).len(), 2);
        assert_eq!(display_source(None, &all, &results).len(), 2);
    }

    #[test]
    fn delivery_window_spans_fifteen_minutes() {
        let mut r = restaurant(1, "A");
        assert_eq!(r.delivery_window(), (30, 45));

        r.delivery_time = Some(20);
        assert_eq!(r.delivery_window(), (20, 35));
    }

    #[test]
    fn parses_filter_and_sort_names() -> TestResult {
        assert_eq!("open".parse::<RestaurantFilter>()?, RestaurantFilter::OpenNow);
        assert_eq!("FAST".parse::<RestaurantFilter>()?, RestaurantFilter::Fast);
        assert_eq!(
            "delivery".parse::<RestaurantSort>()?,
            RestaurantSort::DeliveryTime
        );
        assert!("cheapest".parse::<RestaurantSort>().is_err());

        Ok(())
    }

    #[test]
    fn deserializes_sparse_server_record() -> TestResult {
        let restaurant: Restaurant =
            serde_json::from_str(r#"{"id":3,"name":"Tandoor","open":true,"cuisineType":"Mughlai"}"#)?;

        assert_eq!(restaurant.id.get(), 3);
        assert_eq!(restaurant.cuisine_type.as_deref(), Some("Mughlai"));
        assert!(restaurant.rating.is_none());
        assert!(restaurant.images.is_empty());

        Ok(())
    }
}
