//! Header label formatting collaborator.
//!
//! The engine never hardcodes locale strings: every header cell label is
//! requested from a [`LabelFormatter`] keyed by an abstract [`LabelKey`], so
//! a host can plug in its own translation service. [`DefaultFormatter`]
//! supplies the built-in English rendering.

use chrono::{Datelike, NaiveDate};

use super::calendar::quarter_of;

/// Abstract label request, pattern-keyed rather than format-string-keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    /// Day-of-month number for a day cell ("17").
    DayNumber(NaiveDate),
    /// Full month and year for a month primary cell ("February 2025").
    MonthYear(NaiveDate),
    /// Month abbreviation for a month secondary cell ("Feb").
    MonthShort(NaiveDate),
    /// Quarter label with year ("Q1 2025").
    QuarterYear(NaiveDate),
    /// Bare quarter label for cells whose year shows in the tier above ("Q1").
    QuarterShort(NaiveDate),
    /// Year label ("2025").
    Year(NaiveDate),
    /// Full logical week span, Monday through Sunday.
    WeekSpan(NaiveDate, NaiveDate),
}

/// Externally supplied date formatter. Must return a string for every key.
pub trait LabelFormatter {
    fn format(&self, key: LabelKey) -> String;
}

/// Built-in English formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl LabelFormatter for DefaultFormatter {
    fn format(&self, key: LabelKey) -> String {
        match key {
            LabelKey::DayNumber(date) => date.day().to_string(),
            LabelKey::MonthYear(date) => date.format("%B %Y").to_string(),
            LabelKey::MonthShort(date) => date.format("%b").to_string(),
            LabelKey::QuarterYear(date) => {
                format!("Q{} {}", quarter_of(date), date.year())
            }
            LabelKey::QuarterShort(date) => format!("Q{}", quarter_of(date)),
            LabelKey::Year(date) => date.year().to_string(),
            LabelKey::WeekSpan(start, end) => week_span_label(start, end),
        }
    }
}

/// Three-tier week span rendering:
/// same month "February 17–23, 2025", crossing months "Feb 28 – Mar 6, 2025",
/// crossing years "Dec 30, 2024 – Jan 5, 2025".
fn week_span_label(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() != end.year() {
        format!(
            "{}, {} – {}, {}",
            start.format("%b %-d"),
            start.year(),
            end.format("%b %-d"),
            end.year()
        )
    } else if start.month() != end.month() {
        format!(
            "{} – {}, {}",
            start.format("%b %-d"),
            end.format("%b %-d"),
            end.year()
        )
    } else {
        format!(
            "{} {}–{}, {}",
            start.format("%B"),
            start.day(),
            end.day(),
            end.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_simple_keys() {
        let f = DefaultFormatter;
        assert_eq!(f.format(LabelKey::DayNumber(d(2025, 1, 7))), "7");
        assert_eq!(f.format(LabelKey::MonthYear(d(2025, 1, 1))), "January 2025");
        assert_eq!(f.format(LabelKey::MonthShort(d(2025, 2, 1))), "Feb");
        assert_eq!(f.format(LabelKey::QuarterYear(d(2025, 8, 15))), "Q3 2025");
        assert_eq!(f.format(LabelKey::QuarterShort(d(2025, 8, 15))), "Q3");
        assert_eq!(f.format(LabelKey::Year(d(2025, 6, 1))), "2025");
    }

    #[test]
    fn test_week_span_same_month() {
        let f = DefaultFormatter;
        assert_eq!(
            f.format(LabelKey::WeekSpan(d(2025, 2, 17), d(2025, 2, 23))),
            "February 17–23, 2025"
        );
    }

    #[test]
    fn test_week_span_crossing_months() {
        let f = DefaultFormatter;
        // A span crossing a month boundary renders as a single label, not two.
        assert_eq!(
            f.format(LabelKey::WeekSpan(d(2025, 2, 28), d(2025, 3, 6))),
            "Feb 28 – Mar 6, 2025"
        );
    }

    #[test]
    fn test_week_span_crossing_years() {
        let f = DefaultFormatter;
        assert_eq!(
            f.format(LabelKey::WeekSpan(d(2024, 12, 30), d(2025, 1, 5))),
            "Dec 30, 2024 – Jan 5, 2025"
        );
    }
}
