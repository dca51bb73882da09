//! Delivery Estimator - combines rate tables with bounded jitter
//!
//! predicted = base_hours × location_factor × shipping_factor × jitter
//! jitter ~ Uniform[0.9, 1.1), drawn fresh for every call
//! result = max(2.0, round(predicted, 1 decimal))
//!
//! The randomness source is owned by the estimator and injected at
//! construction, so tests can seed it and production can draw from entropy.
//! Results must not be cached by input: identical requests differ by design.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::utils::rate_tables::{category_hours, location_factor, shipping_factor};
use crate::utils::{Category, Location, ShippingMethod};

/// Lower bound of the multiplicative jitter
pub const JITTER_MIN: f64 = 0.9;
/// Upper bound (exclusive) of the multiplicative jitter
pub const JITTER_MAX: f64 = 1.1;
/// Shortest delivery time the estimator will ever report
pub const MIN_DELIVERY_HOURS: f64 = 2.0;

/// A fully typed prediction request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub category: Category,
    pub location: Location,
    pub shipping: ShippingMethod,
}

impl PredictionRequest {
    pub fn new(category: Category, location: Location, shipping: ShippingMethod) -> Self {
        Self {
            category,
            location,
            shipping,
        }
    }

    /// Parse all three fields strictly (unknown categories are rejected here)
    pub fn parse(category: &str, location: &str, shipping: &str) -> Result<Self, EstimateError> {
        Ok(Self {
            category: category.parse()?,
            location: location.parse()?,
            shipping: shipping.parse()?,
        })
    }

    /// Hours before jitter and flooring
    pub fn raw_hours(&self) -> f64 {
        self.category.base_hours() * self.location.factor() * self.shipping.factor()
    }
}

/// Rule-based delivery time estimator
pub struct Estimator<R: Rng = StdRng> {
    rng: R,
}

impl Estimator<StdRng> {
    /// Estimator with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Estimator with a reproducible jitter sequence
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for Estimator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Estimator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Predict delivery hours from raw names
    ///
    /// Unknown categories fall back to 48 base hours. Unknown locations or
    /// shipping methods fail with `EstimateError::InvalidInput`.
    pub fn predict(
        &mut self,
        category: &str,
        location: &str,
        shipping: &str,
    ) -> Result<f64, EstimateError> {
        let base = category_hours(category);
        let raw = base * location_factor(location)? * shipping_factor(shipping)?;
        let hours = self.jittered(raw);

        tracing::debug!(category, location, shipping, raw, hours, "predicted delivery time");
        Ok(hours)
    }

    /// Predict delivery hours for an already-validated request
    pub fn predict_request(&mut self, request: &PredictionRequest) -> f64 {
        let raw = request.raw_hours();
        let hours = self.jittered(raw);

        tracing::debug!(
            category = request.category.as_str(),
            location = request.location.as_str(),
            shipping = request.shipping.as_str(),
            raw,
            hours,
            "predicted delivery time"
        );
        hours
    }

    fn jittered(&mut self, raw: f64) -> f64 {
        let variation = self.rng.gen_range(JITTER_MIN..JITTER_MAX);
        finalize_hours(raw * variation)
    }
}

/// Round to one decimal, then apply the 2-hour floor
pub(crate) fn finalize_hours(predicted: f64) -> f64 {
    let rounded = (predicted * 10.0).round() / 10.0;
    rounded.max(MIN_DELIVERY_HOURS)
}
