//! Zoom catalog
//!
//! A fixed table mapping each zoom level to a base day width (integer pixels)
//! and the header pattern rendered at that level. The catalog is the only
//! zoom lever in the default preset-only policy: zoom factors resolve to 1.0
//! and the level itself is stepped coarser/finer.
//!
//! Fractional day widths accumulate rounding drift across hundreds of day
//! cells and desynchronize the header from task bars, so the effective width
//! must stay an integer and never drop below `MIN_DAY_WIDTH_PX`.

use serde::{Deserialize, Serialize};

use super::periods::HeaderPattern;

/// Hard floor for the effective day width.
pub const MIN_DAY_WIDTH_PX: u32 = 3;

/// Fallback when a caller hands us a level the catalog cannot serve.
pub const DEFAULT_LEVEL: ZoomLevel = ZoomLevel::WeeksMedium;

/// Discrete zoom levels, ordered coarse to fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoomLevel {
    QuartersNarrow,
    QuartersMedium,
    QuartersWide,
    MonthsNarrow,
    MonthsMedium,
    MonthsWide,
    WeeksNarrow,
    WeeksMedium,
    WeeksWide,
    DaysCompact,
    DaysNarrow,
    DaysMedium,
    DaysWide,
}

/// All levels, coarse to fine. Stepping walks this slice.
pub const ALL_LEVELS: [ZoomLevel; 13] = [
    ZoomLevel::QuartersNarrow,
    ZoomLevel::QuartersMedium,
    ZoomLevel::QuartersWide,
    ZoomLevel::MonthsNarrow,
    ZoomLevel::MonthsMedium,
    ZoomLevel::MonthsWide,
    ZoomLevel::WeeksNarrow,
    ZoomLevel::WeeksMedium,
    ZoomLevel::WeeksWide,
    ZoomLevel::DaysCompact,
    ZoomLevel::DaysNarrow,
    ZoomLevel::DaysMedium,
    ZoomLevel::DaysWide,
];

/// Immutable configuration for one zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    /// The level this configuration belongs to.
    pub level: ZoomLevel,
    /// Width of one calendar day at factor 1.0, in pixels.
    pub base_day_width_px: u32,
    /// Which primary/secondary unit pair the header shows.
    pub pattern: HeaderPattern,
    /// Allowed manual zoom-factor range for this level.
    pub min_factor: f64,
    /// See `min_factor`.
    pub max_factor: f64,
}

impl ZoomConfig {
    /// Look up the catalog entry for a level. Total over the enum.
    pub fn for_level(level: ZoomLevel) -> ZoomConfig {
        let (base, pattern, min_f, max_f) = match level {
            ZoomLevel::QuartersNarrow => (3, HeaderPattern::YearQuarter, 1.0, 2.0),
            ZoomLevel::QuartersMedium => (4, HeaderPattern::YearQuarter, 1.0, 2.0),
            ZoomLevel::QuartersWide => (5, HeaderPattern::YearQuarter, 1.0, 2.0),
            ZoomLevel::MonthsNarrow => (4, HeaderPattern::QuarterMonth, 1.0, 2.0),
            ZoomLevel::MonthsMedium => (5, HeaderPattern::QuarterMonth, 1.0, 2.0),
            ZoomLevel::MonthsWide => (6, HeaderPattern::QuarterMonth, 1.0, 2.0),
            ZoomLevel::WeeksNarrow => (8, HeaderPattern::MonthWeek, 0.5, 2.0),
            ZoomLevel::WeeksMedium => (12, HeaderPattern::MonthWeek, 0.5, 2.0),
            ZoomLevel::WeeksWide => (18, HeaderPattern::MonthWeek, 0.5, 2.0),
            ZoomLevel::DaysCompact => (25, HeaderPattern::MonthDay, 0.2, 2.0),
            ZoomLevel::DaysNarrow => (40, HeaderPattern::MonthDay, 0.2, 2.0),
            ZoomLevel::DaysMedium => (60, HeaderPattern::MonthDay, 0.1, 2.0),
            ZoomLevel::DaysWide => (120, HeaderPattern::MonthDay, 0.1, 2.0),
        };
        ZoomConfig {
            level,
            base_day_width_px: base,
            pattern,
            min_factor: min_f,
            max_factor: max_f,
        }
    }

    /// Clamp a requested factor into this level's allowed range.
    pub fn clamp_factor(&self, factor: f64) -> f64 {
        factor.clamp(self.min_factor, self.max_factor)
    }
}

/// Resolve the effective day width for a level and requested factor.
///
/// The factor is clamped to the level's range first. A factor that produces a
/// non-integral width, or a width below the floor, is a configuration defect:
/// it trips a debug assertion during development and falls back to the base
/// width in release builds so a bad preset never blanks the chart.
///
/// Under the preset-only policy the factor is always 1.0 and the clamped
/// product is exactly the integral base width.
pub fn effective_day_width(level: ZoomLevel, factor: f64) -> u32 {
    let config = ZoomConfig::for_level(level);
    let clamped = config.clamp_factor(factor);
    let width = config.base_day_width_px as f64 * clamped;

    let integral = (width - width.round()).abs() < 1e-9;
    let rounded = width.round() as u32;
    if !integral || rounded < MIN_DAY_WIDTH_PX {
        debug_assert!(
            false,
            "effective day width {width} for {level:?} (factor {factor}) is not a valid pixel width"
        );
        eprintln!(
            "zoom: invalid effective day width {width} for {level:?}; using base width"
        );
        return config.base_day_width_px.max(MIN_DAY_WIDTH_PX);
    }
    rounded
}

/// Whether a manual factor decrease is possible at this level.
///
/// Preset-only policy: factors are pinned to 1.0, so this always reports
/// false and level stepping is the only way to zoom.
#[allow(dead_code)]
pub fn can_zoom_out(_level: ZoomLevel, _factor: f64) -> bool {
    false
}

/// Whether a manual factor increase is possible at this level. See
/// [`can_zoom_out`].
#[allow(dead_code)]
pub fn can_zoom_in(_level: ZoomLevel, _factor: f64) -> bool {
    false
}

/// The next finer level, saturating at `DaysWide`.
pub fn zoom_in_level(level: ZoomLevel) -> ZoomLevel {
    let idx = ALL_LEVELS.iter().position(|l| *l == level).unwrap_or_else(|| {
        debug_assert!(false, "unknown zoom level {level:?}");
        ALL_LEVELS.iter().position(|l| *l == DEFAULT_LEVEL).unwrap_or(0)
    });
    ALL_LEVELS[(idx + 1).min(ALL_LEVELS.len() - 1)]
}

/// The next coarser level, saturating at `QuartersNarrow`.
pub fn zoom_out_level(level: ZoomLevel) -> ZoomLevel {
    let idx = ALL_LEVELS.iter().position(|l| *l == level).unwrap_or_else(|| {
        debug_assert!(false, "unknown zoom level {level:?}");
        ALL_LEVELS.iter().position(|l| *l == DEFAULT_LEVEL).unwrap_or(0)
    });
    ALL_LEVELS[idx.saturating_sub(1)]
}

/// Short label for the zoom toolbar ("Days", "Weeks", ...).
pub fn level_display_name(level: ZoomLevel) -> &'static str {
    match ZoomConfig::for_level(level).pattern {
        HeaderPattern::MonthDay => "Days",
        HeaderPattern::MonthWeek => "Weeks",
        HeaderPattern::QuarterMonth => "Months",
        HeaderPattern::YearQuarter => "Quarters",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_widths_are_valid() {
        for level in ALL_LEVELS {
            let width = effective_day_width(level, 1.0);
            assert!(width >= MIN_DAY_WIDTH_PX, "{level:?} width {width} below floor");
            assert_eq!(width, ZoomConfig::for_level(level).base_day_width_px);
        }
    }

    #[test]
    fn test_factor_clamped_before_multiply() {
        // 0.5 sits inside DaysMedium's [0.1, 2.0] range; 10.0 clamps to 2.0;
        // 0.0 clamps up to WeeksMedium's floor of 0.5.
        assert_eq!(effective_day_width(ZoomLevel::DaysMedium, 0.5), 30);
        assert_eq!(effective_day_width(ZoomLevel::DaysMedium, 10.0), 120);
        assert_eq!(effective_day_width(ZoomLevel::WeeksMedium, 0.0), 6);
    }

    #[test]
    fn test_preset_only_policy_disables_factor_zoom() {
        for level in ALL_LEVELS {
            assert!(!can_zoom_in(level, 1.0));
            assert!(!can_zoom_out(level, 1.0));
        }
    }

    #[test]
    fn test_level_stepping_saturates() {
        assert_eq!(zoom_in_level(ZoomLevel::DaysWide), ZoomLevel::DaysWide);
        assert_eq!(zoom_out_level(ZoomLevel::QuartersNarrow), ZoomLevel::QuartersNarrow);
        assert_eq!(zoom_in_level(ZoomLevel::WeeksWide), ZoomLevel::DaysCompact);
        assert_eq!(zoom_out_level(ZoomLevel::DaysCompact), ZoomLevel::WeeksWide);
    }

    #[test]
    fn test_every_level_has_a_pattern() {
        for level in ALL_LEVELS {
            let config = ZoomConfig::for_level(level);
            assert_eq!(config.level, level);
            assert!(config.min_factor <= 1.0 && 1.0 <= config.max_factor);
        }
    }
}
