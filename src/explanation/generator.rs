use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::estimator::PredictionRequest;
use crate::explanation::fragments::{
    generate_category_fragment, generate_duration_fragment, generate_location_fragment,
    generate_shipping_fragment,
};
use crate::explanation::types::*;
use crate::utils::{delivery_date, hours_to_readable};

/// Main insight/report generator
pub struct InsightGenerator;

impl InsightGenerator {
    /// Evaluate the four rule groups from raw names
    ///
    /// Order is fixed: shipping, location, category, duration. Each group
    /// contributes at most one insight. Names outside the known enumerations
    /// simply fire no rule; this never fails.
    pub fn generate(
        category: &str,
        location: &str,
        shipping: &str,
        predicted_hours: f64,
    ) -> Vec<Insight> {
        [
            generate_shipping_fragment(shipping.parse().ok()),
            generate_location_fragment(location.parse().ok()),
            generate_category_fragment(category.parse().ok()),
            generate_duration_fragment(predicted_hours),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Evaluate the rule groups for a typed request
    pub fn generate_for(request: &PredictionRequest, predicted_hours: f64) -> Vec<Insight> {
        [
            generate_shipping_fragment(Some(request.shipping)),
            generate_location_fragment(Some(request.location)),
            generate_category_fragment(Some(request.category)),
            generate_duration_fragment(predicted_hours),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Build the full report shown after a prediction
    ///
    /// `now` anchors the projected delivery date.
    pub fn report<Tz>(
        request: &PredictionRequest,
        predicted_hours: f64,
        now: DateTime<Tz>,
    ) -> PredictionReport
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let readable = hours_to_readable(predicted_hours);

        let summary = [
            ("Product Category", request.category.as_str()),
            ("Location Type", request.location.as_str()),
            ("Shipping Method", request.shipping.as_str()),
            ("Estimated Time", readable.as_str()),
        ]
        .into_iter()
        .map(|(attribute, value)| SummaryRow {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
        .collect();

        PredictionReport {
            category: request.category,
            location: request.location,
            shipping: request.shipping,
            hours: predicted_hours,
            delivery_date: delivery_date(predicted_hours, now),
            summary,
            insights: Self::generate_for(request, predicted_hours),
            readable,
        }
    }
}

/// Advisory notes as display strings, icon first
pub fn insights(category: &str, location: &str, shipping: &str, predicted_hours: f64) -> Vec<String> {
    InsightGenerator::generate(category, location, shipping, predicted_hours)
        .iter()
        .map(ToString::to_string)
        .collect()
}
