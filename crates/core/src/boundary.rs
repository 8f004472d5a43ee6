//! Validation of raw user rows into [`UserRecord`]s.
//!
//! Rows arrive from the persistence layer as loosely-typed data. Everything
//! the aggregator relies on is checked here so it never needs defensive checks.

use serde::Deserialize;

use crate::domain::{Role, UserRecord};
use crate::error::StatsError;
use crate::ports::Result;

/// User identifiers come back as strings from the API and as integers from some exports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// A user row as exposed by the persistence layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawUserRecord {
    pub id: RawId,
    pub user_role: String,
    pub user_credits: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RawUserRecord {
    /// Checks the row and converts it. `index` is only used for error reporting.
    pub fn validate(self, index: usize) -> Result<UserRecord> {
        let id = self.id.into_string();
        if id.trim().is_empty() {
            return Err(StatsError::invalid_record(index, "empty id"));
        }

        let role = Role::parse(&self.user_role)
            .ok_or_else(|| StatsError::invalid_record(index, "empty user_role"))?;

        if !self.user_credits.is_finite() || self.user_credits < 0.0 {
            return Err(StatsError::invalid_record(
                index,
                format!("user_credits must be a non-negative number, got {}", self.user_credits),
            ));
        }

        // An unparsable created_at is not an error; growth simply skips it
        let created_at = self.created_at.filter(|s| !s.trim().is_empty());

        Ok(UserRecord {
            id,
            role,
            credits: self.user_credits,
            created_at,
        })
    }
}

/// Validates every row, failing on the first bad one.
pub fn validate_records(raw: Vec<RawUserRecord>) -> Result<Vec<UserRecord>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}

/// Decodes and validates a JSON array of user rows.
pub fn parse_records_json(text: &str) -> Result<Vec<UserRecord>> {
    let raw: Vec<RawUserRecord> = serde_json::from_str(text)?;
    validate_records(raw)
}
