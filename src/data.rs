//! Sample Data Synthesis and Aggregation
//!
//! Builds the reporting table by running every category × location × shipping
//! combination through the estimator, then aggregates it with Polars for the
//! analytics views (average hours per category and per shipping method).
//!
//! The table is recomputed on every call. Because the estimator jitters, two
//! tables have identical structure but different hours.

use anyhow::{Context, Result};
use polars::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::estimator::{Estimator, PredictionRequest};
use crate::utils::{Category, Location, ShippingMethod};

/// Number of rows in a complete reporting table
pub const SAMPLE_ROW_COUNT: usize =
    Category::ALL.len() * Location::ALL.len() * ShippingMethod::ALL.len();

/// One combination and its predicted hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub category: Category,
    pub location: Location,
    pub shipping: ShippingMethod,
    pub hours: f64,
}

impl SampleRow {
    pub fn request(&self) -> PredictionRequest {
        PredictionRequest::new(self.category, self.location, self.shipping)
    }
}

/// Mean predicted hours for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAverage {
    pub group: String,
    pub mean_hours: f64,
}

/// Both analytics views, each sorted by ascending mean
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    pub by_category: Vec<GroupAverage>,
    pub by_shipping: Vec<GroupAverage>,
}

/// Run the full cross-product through the estimator
///
/// Category is the outer loop, location the middle, shipping method the inner.
pub fn synthesize<R: Rng>(estimator: &mut Estimator<R>) -> Vec<SampleRow> {
    let mut rows = Vec::with_capacity(SAMPLE_ROW_COUNT);

    for category in Category::ALL {
        for location in Location::ALL {
            for shipping in ShippingMethod::ALL {
                let request = PredictionRequest::new(category, location, shipping);
                rows.push(SampleRow {
                    category,
                    location,
                    shipping,
                    hours: estimator.predict_request(&request),
                });
            }
        }
    }

    tracing::info!("Synthesized {} sample rows", rows.len());
    rows
}

/// Reporting table holder
pub struct SampleData {
    pub rows: Vec<SampleRow>,
}

impl SampleData {
    /// Synthesize a fresh table
    pub fn generate<R: Rng>(estimator: &mut Estimator<R>) -> Self {
        Self {
            rows: synthesize(estimator),
        }
    }

    /// Convert to a DataFrame with category, location, shipping_method, hours
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let categories: Vec<&str> = self.rows.iter().map(|r| r.category.as_str()).collect();
        let locations: Vec<&str> = self.rows.iter().map(|r| r.location.as_str()).collect();
        let methods: Vec<&str> = self.rows.iter().map(|r| r.shipping.as_str()).collect();
        let hours: Vec<f64> = self.rows.iter().map(|r| r.hours).collect();

        let df = df! {
            "category" => categories,
            "location" => locations,
            "shipping_method" => methods,
            "hours" => hours
        }
        .context("Failed to build sample DataFrame")?;

        Ok(df)
    }

    /// Mean hours per product category, ascending
    pub fn average_by_category(&self) -> Result<Vec<GroupAverage>> {
        self.average_by("category")
    }

    /// Mean hours per shipping method, ascending
    pub fn average_by_shipping(&self) -> Result<Vec<GroupAverage>> {
        self.average_by("shipping_method")
    }

    pub fn analytics(&self) -> Result<Analytics> {
        Ok(Analytics {
            by_category: self.average_by_category()?,
            by_shipping: self.average_by_shipping()?,
        })
    }

    fn average_by(&self, column: &str) -> Result<Vec<GroupAverage>> {
        let averages = self
            .to_dataframe()?
            .lazy()
            .group_by([col(column)])
            .agg([col("hours").mean().alias("mean_hours")])
            .sort(["mean_hours"], Default::default())
            .collect()
            .with_context(|| format!("Failed to aggregate hours by {}", column))?;

        let groups = averages.column(column)?.str()?;
        let means = averages.column("mean_hours")?.f64()?;

        groups
            .into_iter()
            .zip(means.into_iter())
            .map(|(group, mean)| match (group, mean) {
                (Some(group), Some(mean_hours)) => Ok(GroupAverage {
                    group: group.to_string(),
                    mean_hours,
                }),
                _ => anyhow::bail!("Null value in {} aggregate", column),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_synthesize_covers_cross_product() {
        let mut estimator = Estimator::seeded(5);
        let rows = synthesize(&mut estimator);

        assert_eq!(rows.len(), 84);
        let unique: HashSet<PredictionRequest> = rows.iter().map(|r| r.request()).collect();
        assert_eq!(unique.len(), 84);
    }

    #[test]
    fn test_synthesize_nested_order() {
        let mut estimator = Estimator::seeded(5);
        let rows = synthesize(&mut estimator);

        assert_eq!(rows[0].request(), PredictionRequest::new(Category::Electronics, Location::Urban, ShippingMethod::Standard));
        assert_eq!(rows[3].shipping, ShippingMethod::Economy);
        assert_eq!(rows[4].location, Location::Suburban);
        assert_eq!(rows[12].category, Category::Clothing);
        assert_eq!(rows[83].request(), PredictionRequest::new(Category::Toys, Location::Rural, ShippingMethod::Economy));
    }

    #[test]
    fn test_tables_differ_between_calls() {
        let mut estimator = Estimator::seeded(9);
        let first = synthesize(&mut estimator);
        let second = synthesize(&mut estimator);

        assert_eq!(first.len(), second.len());
        assert!(first.iter().zip(&second).all(|(a, b)| a.request() == b.request()));
        assert!(first.iter().zip(&second).any(|(a, b)| a.hours != b.hours));
    }

    #[test]
    fn test_to_dataframe_shape() {
        let mut estimator = Estimator::seeded(2);
        let data = SampleData::generate(&mut estimator);
        let df = data.to_dataframe().unwrap();

        assert_eq!(df.height(), 84);
        assert_eq!(df.width(), 4);
        let total: f64 = data.rows.iter().map(|r| r.hours).sum();
        assert_relative_eq!(df.column("hours").unwrap().f64().unwrap().sum().unwrap(), total, epsilon = 1e-6);
    }

    #[test]
    fn test_average_by_shipping_sorted() {
        let mut estimator = Estimator::seeded(4);
        let data = SampleData::generate(&mut estimator);
        let averages = data.average_by_shipping().unwrap();

        let order: Vec<&str> = averages.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(order, vec!["Overnight", "Express", "Standard", "Economy"]);
    }

    #[test]
    fn test_average_by_category_extremes() {
        let mut estimator = Estimator::seeded(8);
        let analytics = SampleData::generate(&mut estimator).analytics().unwrap();

        assert_eq!(analytics.by_category.len(), 7);
        assert_eq!(analytics.by_category[0].group, "Books");
        assert_eq!(analytics.by_category[6].group, "Home & Garden");
        assert!(analytics
            .by_category
            .windows(2)
            .all(|w| w[0].mean_hours <= w[1].mean_hours));
    }
}
