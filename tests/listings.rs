//! Integration tests for restaurant listing and menu selectors

use testresult::TestResult;

use morsel::{
    foods::{Food, group_by_category},
    restaurants::{Restaurant, RestaurantFilter, RestaurantSort, filter_and_sort},
};

fn restaurants() -> Result<Vec<Restaurant>, serde_json::Error> {
    serde_json::from_str(
        r#"[
            {"id": 1, "name": "Saravana Bhavan", "open": true, "rating": 4.2, "deliveryTime": 25},
            {"id": 2, "name": "bombay canteen", "open": false, "rating": 4.9, "deliveryTime": 45},
            {"id": 3, "name": "Anand Sweets", "open": true, "deliveryTime": 30},
            {"id": 4, "name": "Karim's", "open": true, "rating": 3.8},
            {"id": 5, "name": "Paradise Biryani", "open": false, "rating": 4.5, "deliveryTime": 15}
        ]"#,
    )
}

#[test]
fn every_filter_and_sort_combination_holds_its_properties() -> TestResult {
    let all = restaurants()?;

    for filter in [RestaurantFilter::All, RestaurantFilter::OpenNow, RestaurantFilter::Fast] {
        for sort in [
            RestaurantSort::Name,
            RestaurantSort::Rating,
            RestaurantSort::DeliveryTime,
        ] {
            let listed = filter_and_sort(&all, filter, sort);

            assert!(listed.iter().all(|r| filter.matches(r)));
            assert_eq!(
                listed.len(),
                all.iter().filter(|r| filter.matches(r)).count(),
                "{filter} {sort} drops nothing that matches"
            );
            assert!(
                listed.is_sorted_by(|a, b| sort.compare(a, b).is_le()),
                "{filter} {sort} is ordered"
            );
        }
    }

    Ok(())
}

#[test]
fn fast_means_known_delivery_within_thirty_minutes() -> TestResult {
    let all = restaurants()?;

    let fast: Vec<u64> = filter_and_sort(&all, RestaurantFilter::Fast, RestaurantSort::DeliveryTime)
        .iter()
        .map(|r| r.id.get())
        .collect();

    assert_eq!(fast, [5, 1, 3]);

    Ok(())
}

#[test]
fn rating_sort_substitutes_default_for_unrated() -> TestResult {
    let all = restaurants()?;

    let ratings: Vec<f64> = filter_and_sort(&all, RestaurantFilter::All, RestaurantSort::Rating)
        .iter()
        .map(|r| r.rating_or_default())
        .collect();

    assert_eq!(ratings, [4.9, 4.5, 4.5, 4.2, 3.8]);

    Ok(())
}

#[test]
fn menu_groups_keep_server_order() -> TestResult {
    let foods: Vec<Food> = serde_json::from_str(
        r#"[
            {"id": 1, "name": "Chaat", "price": 60, "foodCategory": {"name": "Snacks"}},
            {"id": 2, "name": "Kulfi", "price": 80},
            {"id": 3, "name": "Biryani", "price": 320, "foodCategory": {"name": "Mains"}},
            {"id": 4, "name": "Pakora", "price": 90, "foodCategory": {"name": "Snacks"}}
        ]"#,
    )?;

    let sections = group_by_category(&foods);
    let names: Vec<(&str, Vec<&str>)> = sections
        .iter()
        .map(|s| (s.name, s.foods.iter().map(|f| f.name.as_str()).collect()))
        .collect();

    assert_eq!(
        names,
        [
            ("Snacks", vec!["Chaat", "Pakora"]),
            ("Mains", vec!["Biryani"]),
            ("Other", vec!["Kulfi"]),
        ]
    );

    Ok(())
}
