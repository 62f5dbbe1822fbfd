//! # Daily Series
//!
//! Orders per day for one status, keyed by each order's effective date.

use crate::model::OrderRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the points of a daily series are ordered.
///
/// The legacy dashboard emitted dates in the order it first met them in the record
/// list, which is not necessarily chronological once orders get resolved on later
/// days. Both orders are available; one configured order is used for every series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrder {
    /// Ascending by date.
    #[default]
    Chronological,
    /// First-encounter order of each date in the input.
    FirstSeen,
}

/// Orders counted on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts orders with `code` per effective date.
///
/// The effective date is the finish date when present, otherwise the creation date
/// (see [`OrderRecord::effective_date`]). Orders without a usable effective date are
/// skipped. One point is produced per distinct date.
pub fn daily_series(records: &[OrderRecord], code: u16, order: SeriesOrder) -> Vec<DailyPoint> {
    let mut points: Vec<DailyPoint> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for date in records
        .iter()
        .filter(|r| r.code == code)
        .filter_map(OrderRecord::effective_date)
    {
        match index.get(&date) {
            Some(&i) => points[i].count += 1,
            None => {
                index.insert(date, points.len());
                points.push(DailyPoint { date, count: 1 });
            }
        }
    }

    if order == SeriesOrder::Chronological {
        points.sort_by_key(|p| p.date);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;

    fn record(id: u64, code: u16, created: Option<&str>, finished: Option<&str>) -> OrderRecord {
        OrderRecord {
            id,
            code,
            created_date: created.map(Into::into),
            finished_date: finished.map(Into::into),
            submitted_date: None,
            waiting_for_parts: false,
        }
    }

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_single_date_collapses() {
        let records: Vec<_> = (1..=5).map(|id| record(id, 100, Some("2024-03-01"), None)).collect();
        let series = daily_series(&records, 100, SeriesOrder::Chronological);
        assert_eq!(series, vec![DailyPoint { date: day("2024-03-01"), count: 5 }]);
    }

    #[test]
    fn test_filters_by_code_and_uses_finish_date() {
        let records = vec![
            record(1, 500, Some("2024-03-01"), Some("2024-03-03")),
            record(2, 500, Some("2024-03-02"), Some("2024-03-03")),
            record(3, 100, Some("2024-03-03"), None),
        ];
        let series = daily_series(&records, 500, SeriesOrder::Chronological);
        assert_eq!(series, vec![DailyPoint { date: day("2024-03-03"), count: 2 }]);
    }

    #[test]
    fn test_skips_undated_and_malformed() {
        let records = vec![
            record(1, 100, None, None),
            record(2, 100, Some("03/01/2024"), None),
            record(3, 100, Some("2024-03-01"), Some("garbage")),
            record(4, 100, Some("2024-03-01"), None),
        ];
        let series = daily_series(&records, 100, SeriesOrder::Chronological);
        assert_eq!(series, vec![DailyPoint { date: day("2024-03-01"), count: 1 }]);
    }

    #[test]
    fn test_ordering_modes() {
        let records = vec![
            record(1, 500, Some("2024-03-01"), Some("2024-03-05")),
            record(2, 500, Some("2024-03-01"), Some("2024-03-02")),
            record(3, 500, Some("2024-03-03"), Some("2024-03-05")),
        ];

        let first_seen = daily_series(&records, 500, SeriesOrder::FirstSeen);
        assert_eq!(
            first_seen,
            vec![
                DailyPoint { date: day("2024-03-05"), count: 2 },
                DailyPoint { date: day("2024-03-02"), count: 1 },
            ]
        );

        let chronological = daily_series(&records, 500, SeriesOrder::Chronological);
        assert_eq!(
            chronological,
            vec![
                DailyPoint { date: day("2024-03-02"), count: 1 },
                DailyPoint { date: day("2024-03-05"), count: 2 },
            ]
        );
    }

    #[test]
    fn test_unknown_code_yields_empty_series() {
        let records = vec![record(1, 100, Some("2024-03-01"), None)];
        assert!(daily_series(&records, 999, SeriesOrder::FirstSeen).is_empty());
    }
}
