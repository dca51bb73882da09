//! Timelytics - rule-based delivery time estimation
//!
//! Estimates delivery hours from product category, customer location and
//! shipping method, then derives readable text and aggregate tables:
//! - `utils/`: Rate tables and duration/date formatting
//! - `estimator`: Rate tables × bounded jitter × 2-hour floor
//! - `explanation/`: Advisory insights and report formatters
//! - `data`: Sample table synthesis and Polars aggregates
//! - `config`: Environment configuration for the binaries

pub mod utils;
pub mod error;
pub mod estimator;
pub mod explanation;
pub mod data;
pub mod config;

// Re-export commonly used types
pub use utils::{
    category_hours, delivery_date, delivery_date_from_now, hours_to_readable, location_factor,
    shipping_factor, Category, Location, ShippingMethod,
};
pub use error::{ConfigError, EstimateError};
pub use estimator::{Estimator, PredictionRequest};
pub use explanation::{
    insights, Insight, InsightGenerator, InsightKind, JsonFormatter, MarkdownFormatter,
    PredictionReport,
};
pub use data::{synthesize, Analytics, GroupAverage, SampleData, SampleRow};
pub use config::{Config, OutputFormat};
