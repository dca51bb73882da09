pub mod types;
pub mod fragments;
pub mod generator;
pub mod formatters;

pub use types::{Insight, InsightKind, PredictionReport, SummaryRow};

pub use fragments::{
    generate_category_fragment, generate_duration_fragment, generate_location_fragment,
    generate_shipping_fragment,
};

pub use generator::{insights, InsightGenerator};
pub use formatters::{JsonFormatter, MarkdownFormatter};
