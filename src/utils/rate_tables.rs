//! Delivery Rate Tables
//!
//! Static lookup data for the estimator:
//! - Category: base handling time in hours
//! - Location: multiplier for the delivery area type
//! - Shipping method: multiplier for the chosen service level
//!
//! Category lookups by name degrade to `DEFAULT_CATEGORY_HOURS` on a miss.
//! Location and shipping lookups have no default and fail with
//! `EstimateError::InvalidInput`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// Base hours used when a category name is not recognised
pub const DEFAULT_CATEGORY_HOURS: f64 = 48.0;

// ============================================================================
// PRODUCT CATEGORY
// ============================================================================

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
    Beauty,
    Toys,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::HomeAndGarden,
        Category::Sports,
        Category::Beauty,
        Category::Toys,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::HomeAndGarden => "Home & Garden",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
            Category::Toys => "Toys",
        }
    }

    /// Handling time before location and shipping multipliers
    pub fn base_hours(&self) -> f64 {
        match self {
            Category::Electronics => 48.0,
            Category::Clothing => 36.0,
            Category::Books => 24.0,
            Category::HomeAndGarden => 72.0,
            Category::Sports => 48.0,
            Category::Beauty => 36.0,
            Category::Toys => 48.0,
        }
    }
}

// ============================================================================
// CUSTOMER LOCATION
// ============================================================================

/// Customer location type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Urban,
    Suburban,
    Rural,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Urban, Location::Suburban, Location::Rural];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Urban => "Urban",
            Location::Suburban => "Suburban",
            Location::Rural => "Rural",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Location::Urban => 0.8,
            Location::Suburban => 1.0,
            Location::Rural => 1.3,
        }
    }
}

// ============================================================================
// SHIPPING METHOD
// ============================================================================

/// Shipping service level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    Standard,
    Express,
    Overnight,
    Economy,
}

impl ShippingMethod {
    /// All methods in the order the order form lists them
    pub const ALL: [ShippingMethod; 4] = [
        ShippingMethod::Standard,
        ShippingMethod::Express,
        ShippingMethod::Overnight,
        ShippingMethod::Economy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
            ShippingMethod::Overnight => "Overnight",
            ShippingMethod::Economy => "Economy",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            ShippingMethod::Overnight => 0.3,
            ShippingMethod::Express => 0.6,
            ShippingMethod::Standard => 1.0,
            ShippingMethod::Economy => 1.4,
        }
    }
}

// ============================================================================
// STRING BOUNDARY
// ============================================================================

macro_rules! impl_named {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = EstimateError;

            /// Exact, case-sensitive match on the display name
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| EstimateError::invalid($field, s))
            }
        }
    };
}

impl_named!(Category, "category");
impl_named!(Location, "location");
impl_named!(ShippingMethod, "shipping method");

/// Base hours for a category name, falling back to 48 for unknown names
pub fn category_hours(name: &str) -> f64 {
    name.parse::<Category>()
        .map(|c| c.base_hours())
        .unwrap_or(DEFAULT_CATEGORY_HOURS)
}

/// Location multiplier; unknown names are invalid input
pub fn location_factor(name: &str) -> Result<f64, EstimateError> {
    Ok(name.parse::<Location>()?.factor())
}

/// Shipping multiplier; unknown names are invalid input
pub fn shipping_factor(name: &str) -> Result<f64, EstimateError> {
    Ok(name.parse::<ShippingMethod>()?.factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_category_hours() {
        assert_relative_eq!(category_hours("Electronics"), 48.0);
        assert_relative_eq!(category_hours("Books"), 24.0);
        assert_relative_eq!(category_hours("Home & Garden"), 72.0);
        assert_relative_eq!(category_hours("Beauty"), 36.0);
    }

    #[test]
    fn test_unknown_category_uses_default() {
        assert_relative_eq!(category_hours("Groceries"), DEFAULT_CATEGORY_HOURS);
        // Names are case-sensitive
        assert_relative_eq!(category_hours("books"), DEFAULT_CATEGORY_HOURS);
        assert_relative_eq!(category_hours(""), DEFAULT_CATEGORY_HOURS);
    }

    #[test]
    fn test_location_and_shipping_factors() {
        assert_relative_eq!(location_factor("Urban").unwrap(), 0.8);
        assert_relative_eq!(location_factor("Rural").unwrap(), 1.3);
        assert_relative_eq!(shipping_factor("Overnight").unwrap(), 0.3);
        assert_relative_eq!(shipping_factor("Economy").unwrap(), 1.4);
    }

    #[test]
    fn test_unknown_location_and_shipping_fail() {
        assert_eq!(
            location_factor("Moon"),
            Err(EstimateError::InvalidInput {
                field: "location",
                value: "Moon".to_string()
            })
        );
        assert!(matches!(
            shipping_factor("Teleport"),
            Err(EstimateError::InvalidInput { field: "shipping method", .. })
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
        assert_eq!(Category::HomeAndGarden.to_string(), "Home & Garden");
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::HomeAndGarden).unwrap();
        assert_eq!(json, "\"Home & Garden\"");
        let method: ShippingMethod = serde_json::from_str("\"Express\"").unwrap();
        assert_eq!(method, ShippingMethod::Express);
    }
}
