//! Derived dashboard views over a list of users.
//!
//! Both functions are pure: they read the slice, allocate call-local data,
//! and never mutate their input.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{GrowthPoint, Role, RoleSummary, UserRecord};
use crate::utils::{day_of, parse_created_at};

/// Counts users per role and averages their credits.
///
/// An empty slice yields `average_credits: None` rather than a NaN.
pub fn summarize_roles(records: &[UserRecord]) -> RoleSummary {
    let total = records.len();
    let distributor_count = records
        .iter()
        .filter(|r| r.role == Role::Distributor)
        .count();
    let merchant_count = records.iter().filter(|r| r.role == Role::Merchant).count();

    // Running mean: stays finite for any finite, non-negative credits
    let average_credits = records
        .iter()
        .enumerate()
        .fold(None, |mean: Option<f64>, (i, r)| {
            let prev = mean.unwrap_or(0.0);
            Some(prev + (r.credits - prev) / (i + 1) as f64)
        });

    RoleSummary {
        total,
        distributor_count,
        merchant_count,
        average_credits,
    }
}

/// Builds the cumulative growth series, one point per UTC calendar day.
///
/// Records without a parsable `created_at` are skipped. The rest are ordered
/// chronologically (stable, so ties keep input order) and each day takes the
/// 1-based rank of its first record.
pub fn compute_growth(records: &[UserRecord]) -> Vec<GrowthPoint> {
    let mut dated: Vec<_> = records
        .iter()
        .filter_map(|r| r.created_at.as_deref().and_then(parse_created_at))
        .collect();

    let dropped = records.len() - dated.len();
    if dropped > 0 {
        tracing::debug!(dropped, "Skipping users without a usable created_at");
    }

    // Stable: equal timestamps keep their input order
    dated.sort();

    let mut first_rank_by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for (position, timestamp) in dated.iter().enumerate() {
        first_rank_by_day
            .entry(day_of(timestamp))
            .or_insert(position + 1);
    }

    first_rank_by_day
        .into_iter()
        .map(|(day, cumulative_count)| GrowthPoint {
            day,
            cumulative_count,
        })
        .collect()
}
