//! Symptom graphing — converts categorical readings into ordinal,
//! chart-ready series grouped per symptom per category.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::enums::SymptomCategory;
use crate::models::SymptomReading;

/// One charted reading: the raw display value mapped to its ordinal
/// rank for the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub date: NaiveDate,
    pub value: String,
}

/// All points for one symptom under one category, dates ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSeries {
    pub symptom_name: String,
    pub category: SymptomCategory,
    pub points: Vec<GraphPoint>,
}

/// Maps a raw display value to its ordinal rank.
///
/// Matching is case-insensitive. Scale values are already ordinal and
/// pass through, as does anything outside the category's vocabulary:
/// mapping never fails.
pub fn ordinal_value(category: SymptomCategory, raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    let mapped = match category {
        SymptomCategory::YesNo => match normalized.as_str() {
            "yes" => Some("1"),
            "no" => Some("2"),
            _ => None,
        },
        SymptomCategory::MildModerateSevere => match normalized.as_str() {
            "mild" => Some("1"),
            "moderate" => Some("2"),
            "severe" => Some("3"),
            _ => None,
        },
        SymptomCategory::Scale1To10 => None,
    };
    match mapped {
        Some(rank) => rank.to_string(),
        None => raw.to_string(),
    }
}

/// Builds chart-ready series from a window of readings: one series per
/// (symptom name, category) pair, points ascending by date, series
/// sorted by symptom name. Readings with nothing to plot produce no
/// series.
pub fn build_series(readings: &[SymptomReading]) -> Vec<GraphSeries> {
    let mut groups: BTreeMap<(String, &'static str), GraphSeries> = BTreeMap::new();

    for reading in readings {
        let key = (
            reading.symptom_name.trim().to_lowercase(),
            reading.category.as_str(),
        );
        let series = groups.entry(key).or_insert_with(|| GraphSeries {
            symptom_name: reading.symptom_name.trim().to_string(),
            category: reading.category,
            points: Vec::new(),
        });
        series.points.push(GraphPoint {
            date: reading.recorded_on,
            value: ordinal_value(reading.category, &reading.value),
        });
    }

    let mut series: Vec<GraphSeries> = groups.into_values().collect();
    for group in &mut series {
        group.points.sort_by_key(|p| p.date);
    }
    series.retain(|s| !s.points.is_empty());
    series
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
