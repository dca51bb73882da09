use crate::explanation::types::{Insight, InsightKind};

/// Above this the customer is nudged toward express shipping
pub const EXTENDED_DELIVERY_HOURS: f64 = 72.0;
/// Below this the delivery is called out as fast
pub const FAST_DELIVERY_HOURS: f64 = 24.0;

/// Generate the duration-threshold note
///
/// Both thresholds are strict: exactly 24 or exactly 72 hours get no note.
pub fn generate_duration_fragment(predicted_hours: f64) -> Option<Insight> {
    if predicted_hours > EXTENDED_DELIVERY_HOURS {
        Some(Insight::new(
            InsightKind::Duration,
            "⏳",
            "Extended delivery time - consider express shipping for faster delivery",
        ))
    } else if predicted_hours < FAST_DELIVERY_HOURS {
        Some(Insight::new(
            InsightKind::Duration,
            "⚡",
            "Fast delivery expected - your order will arrive quickly!",
        ))
    } else {
        None
    }
}
