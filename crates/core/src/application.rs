use crate::aggregator::{compute_growth, summarize_roles};
use crate::domain::StatisticsReport;
use crate::ports::{ReportWriter, Result, UserSource};

/// Application service that loads users and renders the dashboard statistics
pub struct StatisticsService {
    user_source: Box<dyn UserSource>,
    report_writer: Box<dyn ReportWriter>,
}

impl StatisticsService {
    /// Creates a new StatisticsService with the given dependencies
    pub fn new(user_source: Box<dyn UserSource>, report_writer: Box<dyn ReportWriter>) -> Self {
        Self {
            user_source,
            report_writer,
        }
    }

    /// Fetches all users and derives the role summary and growth series
    pub fn build_report(&self) -> Result<StatisticsReport> {
        let users = self.user_source.fetch_users()?;
        tracing::info!(users = users.len(), "Loaded users");

        let summary = summarize_roles(&users);
        let growth = compute_growth(&users);
        tracing::info!(
            distributors = summary.distributor_count,
            merchants = summary.merchant_count,
            growth_days = growth.len(),
            "Computed statistics"
        );

        Ok(StatisticsReport { summary, growth })
    }

    /// Builds the report and hands it to the writer
    pub fn execute(&self) -> Result<StatisticsReport> {
        let report = self.build_report()?;
        self.report_writer.write(&report)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, UserRecord};
    use crate::error::StatsError;
    use std::sync::{Arc, Mutex};

    struct FixedSource(Vec<UserRecord>);

    impl UserSource for FixedSource {
        fn fetch_users(&self) -> Result<Vec<UserRecord>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl UserSource for FailingSource {
        fn fetch_users(&self) -> Result<Vec<UserRecord>> {
            Err(StatsError::Config("no database configured".to_string()))
        }
    }

    #[derive(Default, Clone)]
    struct CapturingWriter(Arc<Mutex<Vec<StatisticsReport>>>);

    impl ReportWriter for CapturingWriter {
        fn write(&self, report: &StatisticsReport) -> Result<()> {
            self.0.lock().unwrap().push(report.clone());
            Ok(())
        }
    }

    fn user(role: Role, credits: f64, created_at: &str) -> UserRecord {
        UserRecord {
            id: created_at.to_string(),
            role,
            credits,
            created_at: Some(created_at.to_string()),
        }
    }

    #[test]
    fn test_execute_writes_report() {
        let source = FixedSource(vec![
            user(Role::Distributor, 10.0, "2024-01-01 10:00:00"),
            user(Role::Merchant, 20.0, "2024-01-02 10:00:00"),
        ]);
        let writer = CapturingWriter::default();
        let service = StatisticsService::new(Box::new(source), Box::new(writer.clone()));

        let report = service.execute().unwrap();
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.average_credits, Some(15.0));
        assert_eq!(report.growth.len(), 2);

        let written = writer.0.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0], report);
    }

    #[test]
    fn test_execute_propagates_source_error() {
        let writer = CapturingWriter::default();
        let service = StatisticsService::new(Box::new(FailingSource), Box::new(writer.clone()));

        assert!(matches!(service.execute(), Err(StatsError::Config(_))));
        assert!(writer.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_build_report_empty_source() {
        let service = StatisticsService::new(
            Box::new(FixedSource(Vec::new())),
            Box::new(CapturingWriter::default()),
        );
        let report = service.build_report().unwrap();
        assert_eq!(report.summary.average_credits, None);
        assert!(report.growth.is_empty());
    }
}
