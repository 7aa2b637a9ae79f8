//! Food store.

use std::{fmt, sync::Arc};

use morsel::{
    foods::{Food, FoodId, categories, in_category},
    restaurants::RestaurantId,
    store::Resource,
    validation::normalize_keyword,
};

use crate::{
    services::FoodsService,
    stores::{Slice, StoreError},
};

/// Parts of the food slice a request can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodChannel {
    /// The restaurant menu.
    Menu,

    /// Search results.
    Search,

    /// The food being viewed.
    Current,
}

/// Food slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodsState {
    /// Menu of the restaurant being viewed
    pub foods: Vec<Food>,

    /// Menu categories, derived when a full menu is loaded
    pub categories: Vec<String>,

    /// Results of the active search
    pub search_results: Vec<Food>,

    /// Category the menu is narrowed to
    pub selected_category: Option<String>,

    /// Food being viewed
    pub current: Option<Food>,
}

impl FoodsState {
    /// Menu items in the selected category, or the whole menu.
    #[must_use]
    pub fn visible(&self) -> Vec<&Food> {
        in_category(&self.foods, self.selected_category.as_deref())
    }
}

/// Food store.
pub struct FoodStore {
    service: Arc<dyn FoodsService>,
    slice: Slice<FoodsState, FoodChannel>,
}

impl fmt::Debug for FoodStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoodStore")
            .field("slice", &self.slice)
            .finish_non_exhaustive()
    }
}

impl FoodStore {
    #[must_use]
    pub fn new(service: Arc<dyn FoodsService>) -> Self {
        Self {
            service,
            slice: Slice::new("food", FoodsState::default()),
        }
    }

    /// Read the slice.
    pub fn read<R>(&self, read: impl FnOnce(&Resource<FoodsState, FoodChannel>) -> R) -> R {
        self.slice.read(read)
    }

    /// Dismiss the current error.
    pub fn clear_error(&self) {
        self.slice.clear_error();
    }

    /// Load a restaurant's menu and derive its categories.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch_by_restaurant(&self, restaurant: RestaurantId) -> Result<(), StoreError> {
        self.slice
            .run(
                FoodChannel::Menu,
                self.service.by_restaurant(restaurant),
                |state, foods| {
                    state.categories = categories(&foods);
                    state.foods = foods;
                },
            )
            .await
            .map_err(StoreError::from)
    }

    /// Load one category of a restaurant's menu. Categories are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch_by_category(
        &self,
        restaurant: RestaurantId,
        category: &str,
    ) -> Result<(), StoreError> {
        self.slice
            .run(
                FoodChannel::Menu,
                self.service.by_category(restaurant, category.to_string()),
                |state, foods| state.foods = foods,
            )
            .await
            .map_err(StoreError::from)
    }

    /// Search foods by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for a blank name, or
    /// [`StoreError::Request`] if the request fails.
    pub async fn search(&self, name: &str) -> Result<(), StoreError> {
        let name = normalize_keyword(name)?.to_string();

        self.slice
            .run(FoodChannel::Search, self.service.search(name), |state, foods| {
                state.search_results = foods;
            })
            .await
            .map_err(StoreError::from)
    }

    /// Load a single food as the current one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn fetch_by_id(&self, id: FoodId) -> Result<(), StoreError> {
        self.slice
            .run(FoodChannel::Current, self.service.by_id(id), |state, food| {
                state.current = Some(food);
            })
            .await
            .map_err(StoreError::from)
    }

    /// Narrow the menu to `category`, or show everything with `None`.
    pub fn select_category(&self, category: Option<String>) {
        self.slice
            .update(|state| state.selected_category = category);
    }

    /// Drop search results.
    pub fn clear_search_results(&self) {
        self.slice.update(|state| state.search_results.clear());
    }
}

#[cfg(test)]
mod tests {
    use morsel::store::Status;
    use testresult::TestResult;

    use crate::{errors::ClientError, services::MockFoodsService, test::food};

    use super::*;

    fn menu() -> Vec<Food> {
        vec![
            food(1, "Samosa", 40, Some("Starters")),
            food(2, "Dal Makhani", 220, Some("Mains")),
            food(3, "Paneer Tikka", 260, Some("Starters")),
        ]
    }

    #[tokio::test]
    async fn menu_fetch_derives_categories() -> TestResult {
        let mut service = MockFoodsService::new();

        service
            .expect_by_restaurant()
            .withf(|id| id.get() == 3)
            .returning(|_| Ok(menu()));

        let store = FoodStore::new(Arc::new(service));

        store.fetch_by_restaurant(RestaurantId::new(3)).await?;

        store.read(|resource| {
            assert_eq!(resource.data().categories, ["Starters", "Mains"]);
            assert_eq!(resource.data().visible().len(), 3);
        });

        Ok(())
    }

    #[tokio::test]
    async fn selected_category_narrows_visible_items() -> TestResult {
        let mut service = MockFoodsService::new();
        service.expect_by_restaurant().returning(|_| Ok(menu()));

        let store = FoodStore::new(Arc::new(service));
        store.fetch_by_restaurant(RestaurantId::new(3)).await?;

        store.select_category(Some("Starters".to_string()));

        let names: Vec<String> = store.read(|resource| {
            resource
                .data()
                .visible()
                .iter()
                .map(|f| f.name.clone())
                .collect()
        });
        assert_eq!(names, ["Samosa", "Paneer Tikka"]);

        store.select_category(None);
        assert_eq!(store.read(|resource| resource.data().visible().len()), 3);

        Ok(())
    }

    #[tokio::test]
    async fn category_fetch_keeps_existing_categories() -> TestResult {
        let mut service = MockFoodsService::new();
        service.expect_by_restaurant().returning(|_| Ok(menu()));
        service
            .expect_by_category()
            .withf(|_, category| category == "Mains")
            .returning(|_, _| Ok(vec![food(2, "Dal Makhani", 220, Some("Mains"))]));

        let store = FoodStore::new(Arc::new(service));
        store.fetch_by_restaurant(RestaurantId::new(3)).await?;
        store.fetch_by_category(RestaurantId::new(3), "Mains").await?;

        store.read(|resource| {
            assert_eq!(resource.data().foods.len(), 1);
            assert_eq!(resource.data().categories.len(), 2);
        });

        Ok(())
    }

    #[tokio::test]
    async fn failed_search_keeps_results_and_reports_error() -> TestResult {
        let mut service = MockFoodsService::new();
        let mut calls = 0;

        service.expect_search().times(2).returning(move |_| {
            calls += 1;

            if calls == 1 {
                Ok(vec![food(1, "Masala Dosa", 120, None)])
            } else {
                Err(ClientError::from_status(503, r#"{"error":"Service Unavailable"}"#))
            }
        });

        let store = FoodStore::new(Arc::new(service));

        store.search("dosa").await?;
        assert!(store.search("dosa").await.is_err());

        store.read(|resource| {
            assert_eq!(resource.data().search_results.len(), 1);
            assert_eq!(resource.status(), Status::Rejected);
            assert_eq!(resource.error().and_then(|e| e.status), Some(503));
        });

        store.clear_search_results();
        assert!(store.read(|resource| resource.data().search_results.is_empty()));

        Ok(())
    }

    #[tokio::test]
    async fn fetch_by_id_sets_current() -> TestResult {
        let mut service = MockFoodsService::new();
        service
            .expect_by_id()
            .returning(|id| Ok(food(id.get(), "Thali", 250, Some("Mains"))));

        let store = FoodStore::new(Arc::new(service));
        store.fetch_by_id(FoodId::new(9)).await?;

        assert_eq!(
            store.read(|resource| resource.data().current.as_ref().map(|f| f.id.get())),
            Some(9)
        );

        Ok(())
    }
}
