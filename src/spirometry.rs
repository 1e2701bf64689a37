//! Spirometry graphing — numeric lung-function series per measurement
//! kind. Values are already numeric, so unlike symptom graphing there
//! is no ordinal mapping step.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::enums::SpirometryKind;

/// One self-recorded lung-function reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpirometryReading {
    pub kind: SpirometryKind,
    pub recorded_on: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpirometryPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// All readings of one measurement kind, dates ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpirometrySeries {
    pub kind: SpirometryKind,
    pub points: Vec<SpirometryPoint>,
}

/// Groups readings by measurement kind, points ascending by date.
pub fn build_spirometry_series(readings: &[SpirometryReading]) -> Vec<SpirometrySeries> {
    let mut groups: BTreeMap<&'static str, SpirometrySeries> = BTreeMap::new();

    for reading in readings {
        let series = groups
            .entry(reading.kind.as_str())
            .or_insert_with(|| SpirometrySeries {
                kind: reading.kind,
                points: Vec::new(),
            });
        series.points.push(SpirometryPoint {
            date: reading.recorded_on,
            value: reading.value,
        });
    }

    let mut series: Vec<SpirometrySeries> = groups.into_values().collect();
    for group in &mut series {
        group.points.sort_by_key(|p| p.date);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn reading(kind: SpirometryKind, d: u32, value: f64) -> SpirometryReading {
        SpirometryReading {
            kind,
            recorded_on: day(d),
            value,
        }
    }

    #[test]
    fn readings_group_per_kind() {
        let readings = vec![
            reading(SpirometryKind::Fev1, 1, 2.1),
            reading(SpirometryKind::Fvc, 1, 3.4),
            reading(SpirometryKind::Fev1, 2, 2.3),
        ];
        let series = build_spirometry_series(&readings);

        assert_eq!(series.len(), 2);
        let fev1 = series.iter().find(|s| s.kind == SpirometryKind::Fev1).unwrap();
        assert_eq!(fev1.points.len(), 2);
    }

    #[test]
    fn points_are_ascending_by_date() {
        let readings = vec![
            reading(SpirometryKind::Pef, 8, 410.0),
            reading(SpirometryKind::Pef, 2, 390.0),
            reading(SpirometryKind::Pef, 5, 400.0),
        ];
        let series = build_spirometry_series(&readings);
        let dates: Vec<NaiveDate> = series[0].points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(2), day(5), day(8)]);
    }

    #[test]
    fn no_readings_yield_no_series() {
        assert!(build_spirometry_series(&[]).is_empty());
    }
}
