//! Error types for estimation and configuration

use thiserror::Error;

/// Failures surfaced by the estimator boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// A location or shipping value outside the closed enumerations.
    ///
    /// Categories never produce this: unknown categories use the default base.
    #[error("invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },
}

impl EstimateError {
    pub fn invalid(field: &'static str, value: &str) -> Self {
        EstimateError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

/// Failures while reading configuration from the environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("TIMELYTICS_SEED must be an unsigned integer, got '{0}'")]
    InvalidSeed(String),

    #[error("TIMELYTICS_FORMAT must be 'markdown' or 'json', got '{0}'")]
    InvalidFormat(String),
}
