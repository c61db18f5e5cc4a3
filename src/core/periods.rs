//! Header period generation and boundary expansion.
//!
//! A zoom level's pattern pairs a coarse primary unit with a fine secondary
//! unit (Month over Day, Month over Week, Quarter over Month, Year over
//! Quarter). Before generating cells, the requested date range is expanded
//! outward to whole primary-unit boundaries so the header never shows a
//! truncated primary cell. An unexpanded range would render a misleading
//! partial "Q1" covering only part of a quarter.
//!
//! Every cell's pixel position is derived directly from its own dates through
//! the coordinate mapper, never accumulated cell-to-cell, so rounding cannot
//! compound across long ranges.

use chrono::{Datelike, Duration, NaiveDate};

use super::calendar::{
    add_months, month_end, month_start, quarter_end, quarter_start, week_end, week_start,
    year_end, year_start,
};
use super::coords::date_to_pixel;
use super::format::{LabelFormatter, LabelKey};

/// Primary/secondary unit pairing shown by a zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPattern {
    /// Month primary over day secondary.
    MonthDay,
    /// Month primary over Monday-start week secondary.
    MonthWeek,
    /// Quarter primary over month secondary.
    QuarterMonth,
    /// Year primary over quarter secondary.
    YearQuarter,
}

/// Which header row a period belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodTier {
    Primary,
    Secondary,
}

/// One labeled, positioned header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPeriod {
    /// First rendered day of the cell (clipped to the expanded range).
    pub start: NaiveDate,
    /// Last rendered day, inclusive.
    pub end: NaiveDate,
    /// Left edge in pixels, relative to the expanded range start.
    pub x: i64,
    /// Width in pixels; always `(end - start + 1) * day_width`.
    pub width: i64,
    /// Display label. Clipped edge cells keep the full logical period label.
    pub label: String,
    pub tier: PeriodTier,
}

/// A requested date range together with its boundary-expanded superset.
///
/// Invariant: `expanded_start <= requested_start <= requested_end <=
/// expanded_end`, with the expanded bounds on whole primary-unit boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineRange {
    pub requested_start: NaiveDate,
    pub requested_end: NaiveDate,
    pub expanded_start: NaiveDate,
    pub expanded_end: NaiveDate,
}

impl TimelineRange {
    /// Number of days the expanded range covers (end inclusive).
    pub fn expanded_days(&self) -> i64 {
        (self.expanded_end - self.expanded_start).num_days() + 1
    }
}

impl HeaderPattern {
    /// Snap a date down to the start of its enclosing primary period.
    fn primary_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            HeaderPattern::MonthDay | HeaderPattern::MonthWeek => month_start(date),
            HeaderPattern::QuarterMonth => quarter_start(date),
            HeaderPattern::YearQuarter => year_start(date),
        }
    }

    /// Snap a date up to the end of its enclosing primary period.
    fn primary_end(self, date: NaiveDate) -> NaiveDate {
        match self {
            HeaderPattern::MonthDay | HeaderPattern::MonthWeek => month_end(date),
            HeaderPattern::QuarterMonth => quarter_end(date),
            HeaderPattern::YearQuarter => year_end(date),
        }
    }
}

/// Expand a requested range outward to whole primary-unit boundaries.
///
/// Degenerate input (inverted range) is normalized to the single day at
/// `start` before expanding. Idempotent: expanding an already-expanded range
/// returns the same bounds.
pub fn expand(start: NaiveDate, end: NaiveDate, pattern: HeaderPattern) -> TimelineRange {
    let end = end.max(start);
    TimelineRange {
        requested_start: start,
        requested_end: end,
        expanded_start: pattern.primary_start(start),
        expanded_end: pattern.primary_end(end),
    }
}

/// Both header tiers for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPeriods {
    pub primary: Vec<HeaderPeriod>,
    pub secondary: Vec<HeaderPeriod>,
}

/// Generate both tiers of header cells for an expanded range.
pub fn generate(
    range: &TimelineRange,
    pattern: HeaderPattern,
    day_width: u32,
    formatter: &dyn LabelFormatter,
) -> GeneratedPeriods {
    match pattern {
        HeaderPattern::MonthDay => GeneratedPeriods {
            primary: month_periods(range, day_width, formatter, PeriodTier::Primary),
            secondary: day_periods(range, day_width, formatter),
        },
        HeaderPattern::MonthWeek => GeneratedPeriods {
            primary: month_periods(range, day_width, formatter, PeriodTier::Primary),
            secondary: week_periods(range, day_width, formatter),
        },
        HeaderPattern::QuarterMonth => GeneratedPeriods {
            primary: quarter_periods(range, day_width, formatter, PeriodTier::Primary),
            secondary: month_periods(range, day_width, formatter, PeriodTier::Secondary),
        },
        HeaderPattern::YearQuarter => GeneratedPeriods {
            primary: year_periods(range, day_width, formatter),
            secondary: quarter_periods(range, day_width, formatter, PeriodTier::Secondary),
        },
    }
}

/// Build one cell from its clipped span, positioning it from its own dates.
fn cell(
    start: NaiveDate,
    end: NaiveDate,
    range: &TimelineRange,
    day_width: u32,
    label: String,
    tier: PeriodTier,
) -> HeaderPeriod {
    let days = (end - start).num_days() + 1;
    HeaderPeriod {
        start,
        end,
        x: date_to_pixel(start, range.expanded_start, day_width),
        width: days * day_width as i64,
        label,
        tier,
    }
}

fn day_periods(
    range: &TimelineRange,
    day_width: u32,
    formatter: &dyn LabelFormatter,
) -> Vec<HeaderPeriod> {
    let mut cells = Vec::with_capacity(range.expanded_days() as usize);
    let mut date = range.expanded_start;
    while date <= range.expanded_end {
        cells.push(cell(
            date,
            date,
            range,
            day_width,
            formatter.format(LabelKey::DayNumber(date)),
            PeriodTier::Secondary,
        ));
        date += Duration::days(1);
    }
    cells
}

fn week_periods(
    range: &TimelineRange,
    day_width: u32,
    formatter: &dyn LabelFormatter,
) -> Vec<HeaderPeriod> {
    let mut cells = Vec::new();
    let mut logical_start = week_start(range.expanded_start);
    while logical_start <= range.expanded_end {
        let logical_end = week_end(logical_start);
        // Edge weeks are clipped to the range, but the label still names the
        // full Monday-to-Sunday span.
        let clip_start = logical_start.max(range.expanded_start);
        let clip_end = logical_end.min(range.expanded_end);
        cells.push(cell(
            clip_start,
            clip_end,
            range,
            day_width,
            formatter.format(LabelKey::WeekSpan(logical_start, logical_end)),
            PeriodTier::Secondary,
        ));
        logical_start += Duration::days(7);
    }
    cells
}

fn month_periods(
    range: &TimelineRange,
    day_width: u32,
    formatter: &dyn LabelFormatter,
    tier: PeriodTier,
) -> Vec<HeaderPeriod> {
    let mut cells = Vec::new();
    let mut start = month_start(range.expanded_start);
    while start <= range.expanded_end {
        let end = month_end(start);
        let key = match tier {
            PeriodTier::Primary => LabelKey::MonthYear(start),
            PeriodTier::Secondary => LabelKey::MonthShort(start),
        };
        cells.push(cell(
            start.max(range.expanded_start),
            end.min(range.expanded_end),
            range,
            day_width,
            formatter.format(key),
            tier,
        ));
        start = add_months(start, 1);
    }
    cells
}

fn quarter_periods(
    range: &TimelineRange,
    day_width: u32,
    formatter: &dyn LabelFormatter,
    tier: PeriodTier,
) -> Vec<HeaderPeriod> {
    let mut cells = Vec::new();
    let mut start = quarter_start(range.expanded_start);
    while start <= range.expanded_end {
        let end = quarter_end(start);
        let key = match tier {
            PeriodTier::Primary => LabelKey::QuarterYear(start),
            PeriodTier::Secondary => LabelKey::QuarterShort(start),
        };
        cells.push(cell(
            start.max(range.expanded_start),
            end.min(range.expanded_end),
            range,
            day_width,
            formatter.format(key),
            tier,
        ));
        start = add_months(start, 3);
    }
    cells
}

fn year_periods(
    range: &TimelineRange,
    day_width: u32,
    formatter: &dyn LabelFormatter,
) -> Vec<HeaderPeriod> {
    let mut cells = Vec::new();
    let mut year = range.expanded_start.year();
    while let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1) {
        if start > range.expanded_end {
            break;
        }
        let end = year_end(start);
        cells.push(cell(
            start.max(range.expanded_start),
            end.min(range.expanded_end),
            range,
            day_width,
            formatter.format(LabelKey::Year(start)),
            PeriodTier::Primary,
        ));
        year += 1;
    }
    cells
}
