//! Foods
//!
//! Menu items and the selectors used to group a restaurant's menu by category.

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::ids::Id;

/// Section name for foods without a category.
pub const UNCATEGORISED: &str = "Other";

/// Food Id
pub type FoodId = Id<Food>;

/// Food Category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategory {
    /// Server id
    #[serde(default)]
    pub id: Option<Id<FoodCategory>>,

    /// Category name, e.g. "Starters"
    pub name: String,
}

/// Food (menu item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Server id
    pub id: FoodId,

    /// Display name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price
    pub price: Decimal,

    /// Menu category
    #[serde(default)]
    pub food_category: Option<FoodCategory>,

    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,

    /// Whether the item can currently be ordered
    #[serde(default = "available_by_default")]
    pub available: bool,

    /// Vegetarian
    #[serde(default, alias = "isVegetarian")]
    pub vegetarian: bool,

    /// Seasonal
    #[serde(default, alias = "isSeasonal")]
    pub seasonal: bool,
}

impl Food {
    /// Category name, if the food has a non-blank one.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.food_category
            .as_ref()
            .map(|category| category.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }
}

/// A group of foods sharing a category.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection<'a> {
    /// Category name, or [`UNCATEGORISED`]
    pub name: &'a str,

    /// Foods in menu order
    pub foods: Vec<&'a Food>,
}

/// Unique category names in first-seen order.
#[must_use]
pub fn categories(foods: &[Food]) -> Vec<String> {
    let mut seen = FxHashSet::default();

    foods
        .iter()
        .filter_map(Food::category_name)
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Foods in `category`, or every food when no category is selected.
#[must_use]
pub fn in_category<'a>(foods: &'a [Food], category: Option<&str>) -> Vec<&'a Food> {
    match category {
        None => foods.iter().collect(),
        Some(category) => foods
            .iter()
            .filter(|food| food.category_name() == Some(category))
            .collect(),
    }
}

/// Group foods into sections by category, in first-seen category order.
/// Uncategorised foods come last under [`UNCATEGORISED`], or join a server
/// category of that name when one exists.
#[must_use]
pub fn group_by_category(foods: &[Food]) -> Vec<MenuSection<'_>> {
    let mut sections: Vec<MenuSection<'_>> = Vec::new();
    let mut uncategorised = Vec::new();

    for food in foods {
        let Some(name) = food.category_name() else {
            uncategorised.push(food);
            continue;
        };

        match sections.iter_mut().find(|section| section.name == name) {
            Some(section) => section.foods.push(food),
            None => sections.push(MenuSection {
                name,
                foods: vec![food],
            }),
        }
    }

    if !uncategorised.is_empty() {
        match sections
            .iter_mut()
            .find(|section| section.name == UNCATEGORISED)
        {
            Some(section) => section.foods.extend(uncategorised),
            None => sections.push(MenuSection {
                name: UNCATEGORISED,
                foods: uncategorised,
            }),
        }
    }

    sections
}

fn available_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn food(id: u64, name: &str, category: Option<&str>) -> Food {
        Food {
            id: Id::new(id),
            name: name.to_string(),
            description: None,
            price: Decimal::new(100, 0),
            food_category: category.map(|name| FoodCategory {
                id: None,
                name: name.to_string(),
            }),
            images: Vec::new(),
            available: true,
            vegetarian: false,
            seasonal: false,
        }
    }

    fn menu() -> Vec<Food> {
        vec![
            food(1, "Samosa", Some("Starters")),
            food(2, "Dal Makhani", Some("Mains")),
            food(3, "Paneer Tikka", Some("Starters")),
            food(4, "Masala Chai", None),
            food(5, "Blank", Some("  ")),
        ]
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        assert_eq!(categories(&menu()), ["Starters", "Mains"]);
    }

    #[test]
    fn in_category_none_returns_everything() {
        let menu = menu();

        assert_eq!(in_category(&menu, None).len(), menu.len());
    }

    #[test]
    fn in_category_filters_by_name() {
        let menu = menu();
        let starters = in_category(&menu, Some("Starters"));

        let names: Vec<&str> = starters.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, ["Samosa", "Paneer Tikka"]);
    }

    #[test]
    fn group_by_category_puts_uncategorised_last() {
        let menu = menu();
        let sections = group_by_category(&menu);

        let layout: Vec<(&str, usize)> = sections.iter().map(|s| (s.name, s.foods.len())).collect();

        assert_eq!(layout, [("Starters", 2), ("Mains", 1), ("Other", 2)]);
    }

    #[test]
    fn uncategorised_foods_join_a_server_other_category() {
        let menu = [
            food(1, "Papad", Some("Other")),
            food(2, "Samosa", Some("Starters")),
            food(3, "Masala Chai", None),
        ];

        let sections = group_by_category(&menu);

        let layout: Vec<(&str, Vec<u64>)> = sections
            .iter()
            .map(|s| (s.name, s.foods.iter().map(|f| f.id.get()).collect()))
            .collect();

        assert_eq!(
            layout,
            [("Other", vec![1, 3]), ("Starters", vec![2])],
            "one Other section"
        );
    }

    #[test]
    fn deserializes_integer_price_and_vegetarian_alias() -> TestResult {
        let food: Food = serde_json::from_str(
            r#"{"id":9,"name":"Thali","price":250,"isVegetarian":true,"foodCategory":{"id":2,"name":"Mains"}}"#,
        )?;

        assert_eq!(food.price, Decimal::new(250, 0));
        assert!(food.vegetarian);
        assert!(food.available, "available defaults to true");
        assert_eq!(food.category_name(), Some("Mains"));

        Ok(())
    }
}
