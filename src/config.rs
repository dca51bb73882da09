//! Runtime configuration from environment variables
//!
//! - `TIMELYTICS_SEED`: optional u64; fixes the jitter sequence
//! - `TIMELYTICS_FORMAT`: `markdown` (default) or `json`
//!
//! Log filtering is left to `RUST_LOG`.

use std::str::FromStr;

use crate::error::ConfigError;

pub const SEED_VAR: &str = "TIMELYTICS_SEED";
pub const FORMAT_VAR: &str = "TIMELYTICS_FORMAT";

/// Output rendering for the command-line report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
            ),
            None => None,
        };

        let format = match lookup(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self { seed, format })
    }
}
