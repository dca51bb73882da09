use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::{Category, Location, ShippingMethod};

/// Complete explanation for a single prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub category: Category,
    pub location: Location,
    pub shipping: ShippingMethod,
    pub hours: f64,
    pub readable: String,      // "1 day and 12 hours"
    pub delivery_date: String, // "Friday, October 16, 2026 at 03:30 PM"
    pub summary: Vec<SummaryRow>,
    pub insights: Vec<Insight>,
}

/// One attribute/value line of the order summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub attribute: String,
    pub value: String,
}

/// Which rule group produced an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    Shipping,
    Location,
    Category,
    Duration,
}

/// Advisory note about a prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub icon: String, // "🚀", "🏞️", "⏳"
    pub message: String,
}

impl Insight {
    pub fn new(kind: InsightKind, icon: &str, message: &str) -> Self {
        Self {
            kind,
            icon: icon.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.message)
    }
}
