//! Drainage trend analytics — settled daily totals and the alert
//! classification derived from them.
//!
//! Alerts are never persisted: every graph request recomputes the
//! classification from the loaded history, so there is no stale state
//! to invalidate.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::enums::DrainageAlert;
use crate::models::DrainageEntry;

/// Day-over-day volume increase (ml) that triggers a large-increase
/// alert.
pub const LARGE_INCREASE_THRESHOLD_ML: i64 = 50;

/// Sum of all drainage amounts recorded on one settled calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_volume: i64,
}

/// Groups raw entries by calendar day, sums volumes, and returns the
/// totals ascending by date. The current day is still accumulating and
/// is dropped; alerts are only evaluated on settled days.
pub fn settled_daily_totals(entries: &[DrainageEntry], today: NaiveDate) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for entry in entries {
        let day = entry.recorded_at.date();
        if day >= today {
            continue;
        }
        *by_day.entry(day).or_insert(0) += entry.volume_ml;
    }
    by_day
        .into_iter()
        .map(|(date, total_volume)| DailyTotal { date, total_volume })
        .collect()
}

/// Classifies the drainage trend from settled daily totals (ascending
/// by date) and the patient's volume goal, if one is set.
///
/// The states are mutually exclusive in the response contract, so the
/// checks run highest-precedence first: goal reached, then large
/// single-day increase, then two consecutive days of increase. With
/// fewer than two settled days there is nothing to compare; with fewer
/// than three, only the two-day rule is skipped.
pub fn evaluate_alert(daily_totals: &[DailyTotal], goal: Option<i64>) -> DrainageAlert {
    let n = daily_totals.len();
    if n < 2 {
        return DrainageAlert::None;
    }

    let last = daily_totals[n - 1].total_volume;
    let previous = daily_totals[n - 2].total_volume;

    if let Some(goal) = goal {
        if last <= goal && previous <= goal {
            return DrainageAlert::GoalReached;
        }
    }

    if last - previous > LARGE_INCREASE_THRESHOLD_ML {
        return DrainageAlert::LargeIncrease;
    }

    if n >= 3 {
        let before_previous = daily_totals[n - 3].total_volume;
        if before_previous < previous && previous < last {
            return DrainageAlert::TwoConsecutiveDaysIncreased;
        }
    }

    DrainageAlert::None
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
