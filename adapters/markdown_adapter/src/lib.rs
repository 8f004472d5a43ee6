use stats_core::domain::{GrowthPoint, RoleSummary, StatisticsReport};
use stats_core::ports::{ReportWriter, Result};
use stats_core::utils::format_credits;
use std::fs;
use std::path::PathBuf;

/// Markdown writer adapter implementation
pub struct MarkdownReportWriter {
    output_file: PathBuf,
}

impl MarkdownReportWriter {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// Summary cards as a two-column table
    fn format_summary(&self, summary: &RoleSummary) -> String {
        let mut output = String::new();
        output.push_str("## Users\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|---|---|\n");
        output.push_str(&format!("| Total users | {} |\n", summary.total));
        output.push_str(&format!("| Distributors | {} |\n", summary.distributor_count));
        output.push_str(&format!("| Merchants | {} |\n", summary.merchant_count));
        output.push_str(&format!("| Other roles | {} |\n", summary.other_count()));
        output.push_str(&format!(
            "| Average credits | {} |\n\n",
            format_credits(summary.average_credits)
        ));
        output
    }

    fn format_growth(&self, growth: &[GrowthPoint]) -> String {
        let mut output = String::new();
        output.push_str("## Growth\n\n");

        if growth.is_empty() {
            output.push_str("*No dated users*\n");
            return output;
        }

        output.push_str("| Day | Users |\n");
        output.push_str("|---|---|\n");
        for point in growth {
            output.push_str(&format!(
                "| {} | {} |\n",
                point.day.format("%Y-%m-%d"),
                point.cumulative_count
            ));
        }
        output
    }

    fn format_markdown(&self, report: &StatisticsReport) -> String {
        let mut output = String::new();
        output.push_str("# User statistics\n\n");
        output.push_str(&self.format_summary(&report.summary));
        output.push_str("---\n\n");
        output.push_str(&self.format_growth(&report.growth));
        output
    }
}

impl ReportWriter for MarkdownReportWriter {
    fn write(&self, report: &StatisticsReport) -> Result<()> {
        // Create output directory if it doesn't exist
        if let Some(parent) = self.output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.output_file, self.format_markdown(report))?;
        tracing::info!(path = %self.output_file.display(), "Wrote Markdown report");
        Ok(())
    }
}
