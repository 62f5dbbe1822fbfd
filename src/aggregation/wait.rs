//! Average wait between opening and finishing an order.

use crate::model::OrderRecord;

/// Mean number of days between creation and finish, rounded to one decimal.
///
/// Only orders with both a usable creation date and a usable finish date take part.
/// Dates are calendar days, so every difference is a whole number of 24-hour
/// periods and no time zone is involved. The mean is rounded half away from zero.
/// Returns `0.0` when no order qualifies.
pub fn average_wait_days(records: &[OrderRecord]) -> f64 {
    let (total, finished) = records
        .iter()
        .filter_map(OrderRecord::wait_days)
        .fold((0i64, 0usize), |(total, n), days| (total + days, n + 1));

    if finished == 0 {
        return 0.0;
    }
    round_tenths(total as f64 / finished as f64)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, created: Option<&str>, finished: Option<&str>) -> OrderRecord {
        OrderRecord {
            id,
            code: 500,
            created_date: created.map(Into::into),
            finished_date: finished.map(Into::into),
            submitted_date: None,
            waiting_for_parts: false,
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(average_wait_days(&[]), 0.0);
    }

    #[test]
    fn test_single_record() {
        let records = vec![record(1, Some("2024-01-01"), Some("2024-01-04"))];
        assert_eq!(average_wait_days(&records), 3.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // (1 + 1 + 2) / 3 = 1.333...
        let records = vec![
            record(1, Some("2024-01-01"), Some("2024-01-02")),
            record(2, Some("2024-01-01"), Some("2024-01-02")),
            record(3, Some("2024-01-01"), Some("2024-01-03")),
        ];
        assert_eq!(average_wait_days(&records), 1.3);

        // (0 + 1) / 2 = 0.5, (1 + 2 + 2 + 2) / 4 = 1.75
        let half = vec![
            record(1, Some("2024-01-01"), Some("2024-01-01")),
            record(2, Some("2024-01-01"), Some("2024-01-02")),
        ];
        assert_eq!(average_wait_days(&half), 0.5);
        let quarter = vec![
            record(1, Some("2024-01-01"), Some("2024-01-02")),
            record(2, Some("2024-01-01"), Some("2024-01-03")),
            record(3, Some("2024-01-01"), Some("2024-01-03")),
            record(4, Some("2024-01-01"), Some("2024-01-03")),
        ];
        assert_eq!(average_wait_days(&quarter), 1.8);
    }

    #[test]
    fn test_spans_month_and_leap_day() {
        let records = vec![record(1, Some("2024-02-28"), Some("2024-03-01"))];
        assert_eq!(average_wait_days(&records), 2.0);
    }

    #[test]
    fn test_ignores_unfinished_and_malformed() {
        let records = vec![
            record(1, Some("2024-01-01"), None),
            record(2, None, Some("2024-01-05")),
            record(3, Some("2024-01-01"), Some("Jan 5")),
            record(4, Some("2024-01-01"), Some("2024-01-05")),
        ];
        assert_eq!(average_wait_days(&records), 4.0);
    }
}
