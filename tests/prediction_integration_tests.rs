//! Prediction Integration Tests
//!
//! Exercises the public API end to end: estimation bounds, readable output,
//! insight ordering, sample table shape and the invalid-input contract.

use approx::assert_relative_eq;
use std::collections::HashSet;
use timelytics::{
    hours_to_readable, insights, synthesize, Category, EstimateError, Estimator, Location,
    ShippingMethod,
};

const OVERNIGHT_NOTE: &str = "🚀 Overnight shipping selected - fastest delivery option!";
const URBAN_NOTE: &str = "🏙️ Urban delivery benefits from faster logistics networks";
const BOOKS_NOTE: &str = "📚 Books are typically lightweight and process quickly";
const FAST_NOTE: &str = "⚡ Fast delivery expected - your order will arrive quickly!";

#[test]
fn test_predictions_never_below_floor() {
    let mut estimator = Estimator::seeded(2026);

    for category in Category::ALL {
        for location in Location::ALL {
            for shipping in ShippingMethod::ALL {
                for _ in 0..1000 {
                    let hours = estimator
                        .predict(category.as_str(), location.as_str(), shipping.as_str())
                        .unwrap();
                    assert!(hours >= 2.0, "{} {} {} -> {}", category, location, shipping, hours);
                }
            }
        }
    }
}

#[test]
fn test_neutral_multipliers_average_to_base_hours() {
    let mut estimator = Estimator::seeded(17);
    let trials = 20_000;

    for category in Category::ALL {
        let total: f64 = (0..trials)
            .map(|_| estimator.predict(category.as_str(), "Suburban", "Standard").unwrap())
            .sum();
        let mean = total / trials as f64;

        assert_relative_eq!(mean, category.base_hours(), max_relative = 0.01);
    }
}

#[test]
fn test_readable_examples() {
    assert_eq!(hours_to_readable(5.0), "5 hours");
    assert_eq!(hours_to_readable(24.0), "1 day");
    assert_eq!(hours_to_readable(36.0), "1 day and 12 hours");
    assert_eq!(hours_to_readable(48.0), "2 days");
}

#[test]
fn test_insights_books_urban_overnight() {
    assert_eq!(
        insights("Books", "Urban", "Overnight", 10.0),
        vec![OVERNIGHT_NOTE, URBAN_NOTE, BOOKS_NOTE, FAST_NOTE]
    );
}

#[test]
fn test_insights_empty_when_no_rule_fires() {
    assert!(insights("Electronics", "Suburban", "Standard", 50.0).is_empty());
}

#[test]
fn test_sample_table_has_every_combination_once() {
    let mut estimator = Estimator::new();
    let rows = synthesize(&mut estimator);

    assert_eq!(rows.len(), 84);
    let combos: HashSet<(Category, Location, ShippingMethod)> = rows
        .iter()
        .map(|r| (r.category, r.location, r.shipping))
        .collect();
    assert_eq!(combos.len(), 84);
    assert!(rows.iter().all(|r| r.hours >= 2.0));
}

#[test]
fn test_invalid_location_or_shipping_for_every_category() {
    let mut estimator = Estimator::seeded(0);

    for category in Category::ALL {
        assert_eq!(
            estimator.predict(category.as_str(), "Moon", "Standard"),
            Err(EstimateError::InvalidInput {
                field: "location",
                value: "Moon".to_string()
            })
        );
        assert_eq!(
            estimator.predict(category.as_str(), "Urban", "Teleport"),
            Err(EstimateError::InvalidInput {
                field: "shipping method",
                value: "Teleport".to_string()
            })
        );
    }
}

#[test]
fn test_unknown_category_is_not_an_error() {
    let mut estimator = Estimator::seeded(99);
    let hours = estimator.predict("Furniture", "Suburban", "Standard").unwrap();
    assert!((43.2..=52.8).contains(&hours));
}
