//! Date/pixel coordinate mapping.
//!
//! Everything here is integer arithmetic over whole days so the mapping is
//! exact: no float rounding can drift the header away from the task bars,
//! however long the timeline gets.

use chrono::{Duration, NaiveDate};

/// Horizontal pixel offset of `date` measured from `origin`.
///
/// Strictly monotonic in `date` for any positive `day_width`. Dates before
/// the origin map to negative offsets.
pub fn date_to_pixel(date: NaiveDate, origin: NaiveDate, day_width: u32) -> i64 {
    (date - origin).num_days() * day_width as i64
}

/// Inverse of [`date_to_pixel`]: the calendar day containing pixel `x`.
/// Used for click-to-date hit testing in the interactive panel.
#[allow(dead_code)]
pub fn pixel_to_date(x: i64, origin: NaiveDate, day_width: u32) -> NaiveDate {
    let day_width = day_width.max(1) as i64;
    origin + Duration::days(x.div_euclid(day_width))
}

/// Pixel geometry of one task bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGeometry {
    /// Left edge relative to the timeline origin.
    pub x: i64,
    /// Width in pixels, always at least one day.
    pub width: i64,
}

/// Bar geometry for a task spanning `start..=end`.
///
/// End dates are inclusive (day-level scheduling, not instants), hence the
/// `+ 1`: a task starting and ending on the same day is one day wide. An
/// inverted range is normalized to that single-day case rather than rejected.
pub fn bar_geometry(
    start: NaiveDate,
    end: NaiveDate,
    origin: NaiveDate,
    day_width: u32,
) -> BarGeometry {
    let end = end.max(start);
    let days = (end - start).num_days() + 1;
    BarGeometry {
        x: date_to_pixel(start, origin, day_width),
        width: days * day_width as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_to_pixel_basic() {
        let origin = d(2025, 1, 1);
        assert_eq!(date_to_pixel(origin, origin, 60), 0);
        assert_eq!(date_to_pixel(d(2025, 1, 2), origin, 60), 60);
        assert_eq!(date_to_pixel(d(2025, 2, 1), origin, 60), 31 * 60);
        assert_eq!(date_to_pixel(d(2024, 12, 31), origin, 60), -60);
    }

    #[test]
    fn test_date_to_pixel_strict_monotonicity() {
        let origin = d(2025, 1, 1);
        let mut prev = date_to_pixel(origin, origin, 3);
        let mut date = origin;
        // A year of successive days at the minimum day width.
        for _ in 0..365 {
            date += Duration::days(1);
            let x = date_to_pixel(date, origin, 3);
            assert!(x > prev, "{date} did not advance past previous day");
            prev = x;
        }
    }

    #[test]
    fn test_pixel_to_date_roundtrip() {
        let origin = d(2025, 3, 1);
        for offset in [0i64, 1, 14, 365] {
            let date = origin + Duration::days(offset);
            let x = date_to_pixel(date, origin, 15);
            assert_eq!(pixel_to_date(x, origin, 15), date);
            // Any pixel inside the day cell resolves to the same day.
            assert_eq!(pixel_to_date(x + 14, origin, 15), date);
        }
    }

    #[test]
    fn test_bar_geometry_end_inclusive() {
        let origin = d(2025, 1, 1);
        // One-day task is one day wide.
        let bar = bar_geometry(d(2025, 1, 5), d(2025, 1, 5), origin, 40);
        assert_eq!(bar.x, 4 * 40);
        assert_eq!(bar.width, 40);
        // Jan 1..=Jan 10 covers ten days.
        let bar = bar_geometry(d(2025, 1, 1), d(2025, 1, 10), origin, 60);
        assert_eq!(bar.x, 0);
        assert_eq!(bar.width, 600);
    }

    #[test]
    fn test_bar_geometry_inverted_range_normalized() {
        let origin = d(2025, 1, 1);
        let bar = bar_geometry(d(2025, 1, 10), d(2025, 1, 2), origin, 25);
        assert_eq!(bar.width, 25);
        assert_eq!(bar.x, 9 * 25);
    }
}
