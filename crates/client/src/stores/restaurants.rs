//! Restaurant store.

use std::sync::Arc;

use morsel::{
    restaurants::{
        Restaurant, RestaurantFilter, RestaurantId, RestaurantSort, display_source,
        filter_and_sort,
    },
    store::Resource,
    validation::normalize_keyword,
};

use crate::{
    services::RestaurantsService,
    stores::{Slice, StoreError},
};

/// Parts of the restaurant slice a request can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestaurantChannel {
    /// The full (or per-city) list.
    List,

    /// The restaurant being viewed.
    Current,

    /// Search results.
    Search,
}

/// Restaurant slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantsState {
    /// Full restaurant list
    pub restaurants: Vec<Restaurant>,

    /// Restaurant being viewed
    pub current: Option<Restaurant>,

    /// Results of the active search
    pub search_results: Vec<Restaurant>,

    /// Active search keyword
    pub keyword: Option<String>,
}

impl RestaurantsState {
    /// Restaurants to display: the active source, filtered then sorted.
    #[must_use]
    pub fn listing(&self, filter: RestaurantFilter, sort: RestaurantSort) -> Vec<&Restaurant> {
        let source = display_source(
            self.keyword.as_deref(),
            &self.restaurants,
            &self.search_results,
        );

        filter_and_sort(source, filter, sort)
    }
}

/// Restaurant store.
pub struct RestaurantStore {
    service: Arc<dyn RestaurantsService>,
    slice: Slice<RestaurantsState, RestaurantChannel>,
}

impl std::fmt::Debug for RestaurantStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantStore")
            .field("slice", &self.slice)
            .finish_non_exhaustive()
    }
}

impl RestaurantStore {
    #[must_use]
    pub fn new(service: Arc<dyn RestaurantsService>) -> Self {
        Self {
            service,
            slice: Slice::new("restaurant", RestaurantsState::default()),
        }
    }

    /// Read the slice.
    pub fn read<R>(&self, read: impl FnOnce(&Resource<RestaurantsState, RestaurantChannel>) -> R) -> R {
        self.slice.read(read)
    }

    /// Dismiss the current error.
    pub fn clear_error(&self) {
        self.slice.clear_error();
    }

    /// Load every restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch_all(&self) -> Result<(), StoreError> {
        self.slice
            .run(RestaurantChannel::List, self.service.all(), |state, restaurants| {
                state.restaurants = restaurants;
            })
            .await
            .map_err(StoreError::from)
    }

    /// Load restaurants in `city` into the list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch_by_city(&self, city: &str) -> Result<(), StoreError> {
        self.slice
            .run(
                RestaurantChannel::List,
                self.service.by_city(city.trim().to_string()),
                |state, restaurants| state.restaurants = restaurants,
            )
            .await
            .map_err(StoreError::from)
    }

    /// Load a single restaurant as the current one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch_by_id(&self, id: RestaurantId) -> Result<(), StoreError> {
        self.slice
            .run(RestaurantChannel::Current, self.service.by_id(id), |state, restaurant| {
                state.current = Some(restaurant);
            })
            .await
            .map_err(StoreError::from)
    }

    /// Search restaurants. Results replace the list being displayed once they arrive.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for a blank keyword, or
    /// [`StoreError::Request`] if the request fails.
    pub async fn search(&self, keyword: &str) -> Result<(), StoreError> {
        let keyword = normalize_keyword(keyword)?.to_string();

        self.slice
            .run(
                RestaurantChannel::Search,
                self.service.search(keyword.clone()),
                |state, results| {
                    state.search_results = results;
                    state.keyword = Some(keyword);
                },
            )
            .await
            .map_err(StoreError::from)
    }

    /// Forget the current restaurant.
    pub fn clear_current(&self) {
        self.slice.update(|state| state.current = None);
    }

    /// Drop search results and go back to the full list.
    pub fn clear_search_results(&self) {
        self.slice.update(|state| {
            state.search_results.clear();
            state.keyword = None;
        });
    }
}
