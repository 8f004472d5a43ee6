use std::fs;
use std::path::PathBuf;

use stats_core::boundary::parse_records_json;
use stats_core::domain::{StatisticsReport, UserRecord};
use stats_core::ports::{ReportWriter, Result, UserSource};

/// Reads users from a JSON array export of the users endpoint
pub struct JsonUserSource {
    input_path: PathBuf,
}

impl JsonUserSource {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
        }
    }
}

impl UserSource for JsonUserSource {
    fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        tracing::debug!(path = %self.input_path.display(), "Reading users");
        let text = fs::read_to_string(&self.input_path)?;
        parse_records_json(&text)
    }
}

/// Writes the report as a JSON document for chart and card binding
pub struct JsonReportWriter {
    output_file: PathBuf,
}

impl JsonReportWriter {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }
}

impl ReportWriter for JsonReportWriter {
    fn write(&self, report: &StatisticsReport) -> Result<()> {
        if let Some(parent) = self.output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let body = serde_json::to_string_pretty(report)?;
        fs::write(&self.output_file, body)?;
        tracing::info!(path = %self.output_file.display(), "Wrote JSON report");
        Ok(())
    }
}
