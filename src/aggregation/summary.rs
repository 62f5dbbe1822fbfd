//! # Dashboard Summary
//!
//! Every figure the dashboard renders, computed in one pass over a snapshot and
//! serializable as JSON.

use super::{
    average_wait_days, daily_series, previous_month_window, status_counts, submissions_between,
    DailyPoint, DateWindow, StatusCounts,
};
use crate::config::DashboardConfig;
use crate::model::{OrderRecord, StatusRole};
use chrono::NaiveDate;
use serde::Serialize;

/// Per-day series for one status, with the colour it is charted in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSeries {
    pub code: u16,
    pub name: String,
    pub color: String,
    pub points: Vec<DailyPoint>,
}

/// Everything the dashboard renders, computed from one snapshot.
///
/// This is the hand-off point to the presentation layer and serializes to JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    pub total_records: usize,
    pub status_counts: StatusCounts,
    pub average_wait_days: f64,
    pub last_month: DateWindow,
    pub last_month_submissions: usize,
    /// Daily series for the submitted status, charted as the submissions trend.
    pub submission_trend: Vec<DailyPoint>,
    /// One daily series per catalog status, in catalog order.
    pub series: Vec<StatusSeries>,
}

impl DashboardSummary {
    pub fn compute(records: &[OrderRecord], config: &DashboardConfig, today: NaiveDate) -> Self {
        let catalog = &config.statuses;
        let last_month = previous_month_window(today);

        let series: Vec<StatusSeries> = catalog
            .entries()
            .iter()
            .map(|entry| StatusSeries {
                code: entry.code,
                name: entry.name.clone(),
                color: entry.color.clone(),
                points: daily_series(records, entry.code, config.series_order),
            })
            .collect();

        let submission_trend = catalog
            .code_for_role(StatusRole::Submitted)
            .and_then(|code| series.iter().find(|s| s.code == code))
            .map(|s| s.points.clone())
            .unwrap_or_default();

        Self {
            as_of: today,
            total_records: records.len(),
            status_counts: status_counts(records, catalog),
            average_wait_days: average_wait_days(records),
            last_month,
            last_month_submissions: submissions_between(records, last_month.start, last_month.end_inclusive),
            submission_trend,
            series,
        }
    }

    pub fn series_for(&self, name: &str) -> Option<&StatusSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn scenario() -> Vec<OrderRecord> {
        vec![
            OrderRecord {
                id: 1,
                code: 100,
                created_date: Some("2024-03-01".into()),
                finished_date: None,
                submitted_date: None,
                waiting_for_parts: false,
            },
            OrderRecord {
                id: 2,
                code: 500,
                created_date: Some("2024-03-01".into()),
                finished_date: Some("2024-03-03".into()),
                submitted_date: None,
                waiting_for_parts: false,
            },
            OrderRecord {
                id: 3,
                code: 600,
                created_date: Some("2024-03-02".into()),
                finished_date: None,
                submitted_date: Some("2024-03-02".into()),
                waiting_for_parts: false,
            },
        ]
    }

    #[test]
    fn test_three_record_scenario() {
        let summary = DashboardSummary::compute(&scenario(), &DashboardConfig::default(), day("2024-04-10"));

        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.status_counts.get("New"), Some(1));
        assert_eq!(summary.status_counts.get("Waiting for Spare Parts"), Some(0));
        assert_eq!(summary.status_counts.get("Problem Solved"), Some(1));
        assert_eq!(summary.status_counts.get("Submitted"), Some(1));
        assert_eq!(summary.average_wait_days, 2.0);

        assert_eq!(summary.last_month, DateWindow::new(day("2024-03-01"), day("2024-03-31")));
        assert_eq!(summary.last_month_submissions, 1);
        assert_eq!(
            summary.submission_trend,
            vec![DailyPoint { date: day("2024-03-02"), count: 1 }]
        );

        let solved = summary.series_for("Problem Solved").unwrap();
        assert_eq!(solved.color, "#59a14f");
        assert_eq!(solved.points, vec![DailyPoint { date: day("2024-03-03"), count: 1 }]);
        assert!(summary.series_for("Waiting for Spare Parts").unwrap().points.is_empty());
    }

    #[test]
    fn test_serializes_dates_as_wire_strings() {
        let summary = DashboardSummary::compute(&scenario(), &DashboardConfig::default(), day("2024-03-20"));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["as_of"], "2024-03-20");
        assert_eq!(json["submission_trend"][0]["date"], "2024-03-02");
        assert_eq!(json["last_month_submissions"], 0);
    }
}
