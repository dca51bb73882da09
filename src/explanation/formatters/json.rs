use crate::explanation::types::PredictionReport;
use serde_json;

/// JSON formatter for prediction reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &PredictionReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &PredictionReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
