//! Calendar windows and the submission count inside them.

use crate::model::OrderRecord;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end_inclusive: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end_inclusive: NaiveDate) -> Self {
        Self { start, end_inclusive }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end_inclusive
    }
}

/// The calendar month before the month containing `today`.
///
/// For any day in March 2024 this is 2024-02-01 through 2024-02-29; for January it
/// is December of the previous year.
pub fn previous_month_window(today: NaiveDate) -> DateWindow {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let end_inclusive = first_of_month.pred_opt().unwrap_or(first_of_month);
    let start = end_inclusive.with_day(1).unwrap_or(end_inclusive);
    DateWindow { start, end_inclusive }
}

/// Counts orders whose submission date falls inside `[start, end_inclusive]`.
///
/// Orders without a usable submission date are not counted.
pub fn submissions_between(records: &[OrderRecord], start: NaiveDate, end_inclusive: NaiveDate) -> usize {
    let window = DateWindow::new(start, end_inclusive);
    records
        .iter()
        .filter_map(OrderRecord::submitted_on)
        .filter(|date| window.contains(*date))
        .count()
}
