use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Account classification. Only distributors and merchants get their own
/// bucket; anything else upstream is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Distributor,
    Merchant,
    Other(String),
}

impl Role {
    /// Case-insensitive parse of a `user_role` value. Returns `None` for a blank value.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let role = if trimmed.eq_ignore_ascii_case("distributor") {
            Role::Distributor
        } else if trimmed.eq_ignore_ascii_case("merchant") {
            Role::Merchant
        } else {
            Role::Other(trimmed.to_string())
        };
        Some(role)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Distributor => "distributor",
            Role::Merchant => "merchant",
            Role::Other(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub role: Role,
    pub credits: f64,
    pub created_at: Option<String>, // raw, parsed lazily by the aggregator
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    pub total: usize,
    pub distributor_count: usize,
    pub merchant_count: usize,
    /// `None` when there are no records to average over.
    pub average_credits: Option<f64>,
}

impl RoleSummary {
    /// Records whose role is neither distributor nor merchant.
    pub fn other_count(&self) -> usize {
        self.total - self.distributor_count - self.merchant_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub day: NaiveDate,
    pub cumulative_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub summary: RoleSummary,
    pub growth: Vec<GrowthPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known_roles_case_insensitive() {
        assert_eq!(Role::parse("distributor"), Some(Role::Distributor));
        assert_eq!(Role::parse("DISTRIBUTOR"), Some(Role::Distributor));
        assert_eq!(Role::parse(" Merchant "), Some(Role::Merchant));
    }

    #[test]
    fn test_role_parse_other_keeps_name() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Other("ADMIN".to_string())));
        assert_eq!(Role::parse("ADMIN").unwrap().to_string(), "ADMIN");
    }

    #[test]
    fn test_role_parse_blank() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("   "), None);
    }

    #[test]
    fn test_other_count() {
        let summary = RoleSummary {
            total: 5,
            distributor_count: 2,
            merchant_count: 1,
            average_credits: Some(1.0),
        };
        assert_eq!(summary.other_count(), 2);
    }

    #[test]
    fn test_growth_point_serializes_day_as_date_string() {
        let point = GrowthPoint {
            day: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            cumulative_count: 3,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["day"], "2024-01-02");
        assert_eq!(json["cumulativeCount"], 3);
    }

    #[test]
    fn test_summary_serializes_missing_average_as_null() {
        let summary = RoleSummary {
            total: 0,
            distributor_count: 0,
            merchant_count: 0,
            average_credits: None,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["averageCredits"].is_null());
        assert_eq!(json["distributorCount"], 0);
    }
}
