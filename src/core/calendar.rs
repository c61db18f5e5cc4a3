//! Calendar boundary math on timezone-free dates.
//!
//! All timeline arithmetic works on whole calendar days; these helpers snap
//! dates to the period boundaries the header engine renders (weeks start on
//! Monday, quarters on Jan/Apr/Jul/Oct 1).

use chrono::{Datelike, Duration, NaiveDate};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (next_y, next_m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .map(|d| d - Duration::days(1))
        .unwrap_or(date)
}

/// 1-based quarter number (1..=4) of the month containing `date`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// First day of the quarter containing `date`.
pub fn quarter_start(date: NaiveDate) -> NaiveDate {
    let first_month = (quarter_of(date) - 1) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), first_month, 1)
        .unwrap_or(date)
}

/// Last day of the quarter containing `date`.
pub fn quarter_end(date: NaiveDate) -> NaiveDate {
    let last_month = quarter_of(date) * 3;
    month_end(NaiveDate::from_ymd_opt(date.year(), last_month, 1).unwrap_or(date))
}

/// January 1 of the year containing `date`.
pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// December 31 of the year containing `date`.
pub fn year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// The Sunday on or after `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

/// First day of the month `offset` months after the month containing `date`.
/// Used to walk month-by-month when generating header cells.
pub fn add_months(date: NaiveDate, offset: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + offset as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_start(d(2025, 2, 17)), d(2025, 2, 1));
        assert_eq!(month_end(d(2025, 2, 17)), d(2025, 2, 28));
        assert_eq!(month_end(d(2024, 2, 1)), d(2024, 2, 29)); // leap year
        assert_eq!(month_end(d(2025, 12, 5)), d(2025, 12, 31));
    }

    #[test]
    fn test_quarter_bounds() {
        // The example from the engine contract: Aug 15 sits in Q3.
        assert_eq!(quarter_start(d(2025, 8, 15)), d(2025, 7, 1));
        assert_eq!(quarter_end(d(2025, 8, 15)), d(2025, 9, 30));
        assert_eq!(quarter_of(d(2025, 1, 1)), 1);
        assert_eq!(quarter_of(d(2025, 12, 31)), 4);
        assert_eq!(quarter_end(d(2025, 11, 2)), d(2025, 12, 31));
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(year_start(d(2025, 8, 15)), d(2025, 1, 1));
        assert_eq!(year_end(d(2025, 8, 15)), d(2025, 12, 31));
    }

    #[test]
    fn test_week_bounds_monday_start() {
        // Feb 17 2025 is a Monday.
        assert_eq!(week_start(d(2025, 2, 17)), d(2025, 2, 17));
        assert_eq!(week_start(d(2025, 2, 20)), d(2025, 2, 17));
        assert_eq!(week_end(d(2025, 2, 20)), d(2025, 2, 23));
        // Week crossing a year boundary.
        assert_eq!(week_start(d(2025, 1, 2)), d(2024, 12, 30));
    }

    #[test]
    fn test_add_months() {
        assert_eq!(add_months(d(2025, 1, 15), 0), d(2025, 1, 1));
        assert_eq!(add_months(d(2025, 1, 15), 1), d(2025, 2, 1));
        assert_eq!(add_months(d(2025, 11, 3), 2), d(2026, 1, 1));
    }
}
