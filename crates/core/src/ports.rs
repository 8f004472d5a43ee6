use crate::domain::{StatisticsReport, UserRecord};
use crate::error::StatsError;

pub type Result<T> = std::result::Result<T, StatsError>;

/// Source of validated user records (database, exported JSON, ...).
pub trait UserSource: Send + Sync {
    fn fetch_users(&self) -> Result<Vec<UserRecord>>;
}

/// Trait for rendering a statistics report
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait ReportWriter: Send + Sync {
    fn write(&self, report: &StatisticsReport) -> Result<()>;
}
