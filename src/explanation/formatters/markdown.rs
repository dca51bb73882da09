use crate::data::{Analytics, GroupAverage};
use crate::explanation::types::PredictionReport;

/// Markdown formatter for prediction reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a prediction report as markdown
    pub fn format(report: &PredictionReport) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# 🎯 Prediction Results\n\n");
        md.push_str(&format!(
            "**⏱️ Estimated Delivery Time:** {} ({:.1} hours)\n\n",
            report.readable, report.hours
        ));
        md.push_str(&format!(
            "**📅 Expected Delivery Date:** {}\n\n",
            report.delivery_date
        ));

        // Order summary
        md.push_str("## 📊 Order Summary\n\n");
        md.push_str("| Attribute | Value |\n");
        md.push_str("|-----------|-------|\n");
        for row in &report.summary {
            md.push_str(&format!("| {} | {} |\n", row.attribute, row.value));
        }
        md.push('\n');

        // Insights only when at least one rule fired
        if !report.insights.is_empty() {
            md.push_str("## 💡 Delivery Insights\n\n");
            for insight in &report.insights {
                md.push_str(&format!("• {}\n", insight));
            }
            md.push('\n');
        }

        md
    }

    /// Format the aggregate tables derived from the sample data
    pub fn format_analytics(analytics: &Analytics) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# 📈 Analytics\n\n");
        md.push_str("## Average Delivery Time by Category\n\n");
        Self::format_group_table(&mut md, "Category", &analytics.by_category);

        md.push_str("## Delivery Time Distribution by Shipping Method\n\n");
        Self::format_group_table(&mut md, "Shipping Method", &analytics.by_shipping);

        md
    }

    fn format_group_table(md: &mut String, label: &str, groups: &[GroupAverage]) {
        md.push_str(&format!("| {} | Hours |\n", label));
        md.push_str("|---|---|\n");
        for group in groups {
            md.push_str(&format!("| {} | {:.1} |\n", group.group, group.mean_hours));
        }
        md.push('\n');
    }
}
