//! Utility modules shared by the estimator and the report layer
//!
//! - Rate tables: category base hours, location and shipping multipliers
//! - Readable: duration text and projected delivery dates

pub mod rate_tables;
pub mod readable;

// Re-export commonly used types
pub use rate_tables::{
    category_hours, location_factor, shipping_factor, Category, Location, ShippingMethod,
    DEFAULT_CATEGORY_HOURS,
};
pub use readable::{delivery_date, delivery_date_from_now, hours_to_readable, DELIVERY_DATE_FORMAT};
