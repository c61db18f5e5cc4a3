//! Chart scene assembly.
//!
//! `build_scene` is the single geometry pipeline both renderer variants
//! consume: the interactive panel and the SVG exporter read the same
//! `ChartScene`, so their output is pixel-identical by construction. The
//! scene is a pure function of its inputs; nothing here touches Dioxus.

use chrono::NaiveDate;
use uuid::Uuid;

use super::coords::bar_geometry;
use super::format::LabelFormatter;
use super::periods::{expand, generate, GeneratedPeriods, HeaderPattern, HeaderPeriod, PeriodTier, TimelineRange};
use super::rows::RowMetrics;
use super::zoom::{effective_day_width, ZoomConfig, ZoomLevel};

/// Read-only task span consumed by the engine. The engine never mutates
/// tasks; end dates are inclusive calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpan {
    pub id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Pixel heights the host supplies for one scene build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub zoom_level: ZoomLevel,
    pub zoom_factor: f64,
    pub primary_header_height: f64,
    pub secondary_header_height: f64,
}

/// One positioned header cell: background box plus centered label.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub x: i64,
    pub width: i64,
    pub label: String,
    pub tier: PeriodTier,
    /// Set when the cell is an inert placeholder standing in for a period
    /// that failed to render; the rest of the header is unaffected.
    pub diagnostic: Option<String>,
}

/// Both header tiers as visual cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderCells {
    pub primary: Vec<HeaderCell>,
    pub secondary: Vec<HeaderCell>,
}

/// One task bar positioned against the shared row grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskBar {
    pub task_id: Uuid,
    pub row_index: usize,
    pub x: i64,
    pub width: i64,
    /// Top of the row the bar sits in, from the row tracker.
    pub row_top: f64,
    /// Height of that row.
    pub row_height: f64,
}

/// Complete geometry for one chart rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub range: TimelineRange,
    pub day_width: u32,
    pub header: HeaderCells,
    pub bars: Vec<TaskBar>,
    /// Total width of the expanded range in pixels.
    pub content_width: i64,
    pub primary_header_height: f64,
    pub secondary_header_height: f64,
    /// Total height of all visible rows.
    pub rows_height: f64,
}

impl ChartScene {
    pub fn header_height(&self) -> f64 {
        self.primary_header_height + self.secondary_header_height
    }
}

// =============================================================================
// Header cell renderers
// =============================================================================

/// Turns generated periods into visual cells. One implementation is selected
/// per zoom level by [`renderer_for`]; the mapping is pure and total.
pub trait HeaderRenderer {
    fn cells(&self, periods: &GeneratedPeriods) -> HeaderCells;
}

/// The shared tiered renderer used by every cataloged level. Per-level
/// specialization lives in label formatting, not here.
pub struct TieredRenderer;

impl HeaderRenderer for TieredRenderer {
    fn cells(&self, periods: &GeneratedPeriods) -> HeaderCells {
        HeaderCells {
            primary: periods.primary.iter().map(render_cell).collect(),
            secondary: periods.secondary.iter().map(render_cell).collect(),
        }
    }
}

/// Fallback for a zoom level with no registered renderer: a single inert
/// diagnostic cell per tier instead of a crash or a blank chart.
pub struct PlaceholderRenderer;

impl HeaderRenderer for PlaceholderRenderer {
    fn cells(&self, periods: &GeneratedPeriods) -> HeaderCells {
        let placeholder = |tier: PeriodTier, span: &[HeaderPeriod]| {
            let width = span
                .last()
                .map(|p| p.x + p.width)
                .unwrap_or(0);
            vec![HeaderCell {
                x: 0,
                width,
                label: String::new(),
                tier,
                diagnostic: Some("no header renderer registered for this zoom level".into()),
            }]
        };
        HeaderCells {
            primary: placeholder(PeriodTier::Primary, &periods.primary),
            secondary: placeholder(PeriodTier::Secondary, &periods.secondary),
        }
    }
}

static TIERED: TieredRenderer = TieredRenderer;
#[allow(dead_code)]
pub static PLACEHOLDER: PlaceholderRenderer = PlaceholderRenderer;

/// Pure zoom-level → renderer mapping. Every cataloged level routes through
/// the shared tiered renderer today; a level added without one would fall
/// back to [`PLACEHOLDER`] rather than take the chart down.
pub fn renderer_for(level: ZoomLevel) -> &'static dyn HeaderRenderer {
    match ZoomConfig::for_level(level).pattern {
        HeaderPattern::MonthDay
        | HeaderPattern::MonthWeek
        | HeaderPattern::QuarterMonth
        | HeaderPattern::YearQuarter => &TIERED,
    }
}

/// Render one period as a cell. A malformed period (empty label,
/// non-positive width) becomes an inert placeholder with a diagnostic so one
/// bad cell cannot blank the timeline.
fn render_cell(period: &HeaderPeriod) -> HeaderCell {
    if period.width <= 0 || period.label.is_empty() {
        return HeaderCell {
            x: period.x,
            width: period.width.max(0),
            label: String::new(),
            tier: period.tier,
            diagnostic: Some(format!(
                "unrenderable period {}..{} (width {}px, label {:?})",
                period.start, period.end, period.width, period.label
            )),
        };
    }
    HeaderCell {
        x: period.x,
        width: period.width,
        label: period.label.clone(),
        tier: period.tier,
        diagnostic: None,
    }
}

// =============================================================================
// Scene building
// =============================================================================

/// Build the complete chart geometry for a task range at a zoom level.
///
/// `rows` is the current row metrics table; bars join to it by task id, so a
/// task without a (visible) row produces no bar. An empty or inverted date
/// range is normalized to a single day.
pub fn build_scene(
    tasks: &[TaskSpan],
    rows: &[RowMetrics],
    range_start: NaiveDate,
    range_end: NaiveDate,
    params: &SceneParams,
    formatter: &dyn LabelFormatter,
) -> ChartScene {
    let config = ZoomConfig::for_level(params.zoom_level);
    let day_width = effective_day_width(params.zoom_level, params.zoom_factor);
    let range = expand(range_start, range_end, config.pattern);

    let periods = generate(&range, config.pattern, day_width, formatter);
    let header = renderer_for(params.zoom_level).cells(&periods);

    let mut bars = Vec::new();
    for task in tasks {
        let Some(row) = rows.iter().find(|r| r.row_id == task.id && r.visible) else {
            continue;
        };
        let geometry = bar_geometry(task.start, task.end, range.expanded_start, day_width);
        bars.push(TaskBar {
            task_id: task.id,
            row_index: row.index,
            x: geometry.x,
            width: geometry.width,
            row_top: row.top,
            row_height: row.height,
        });
    }

    let rows_height = rows.iter().filter(|r| r.visible).map(|r| r.height).sum();

    ChartScene {
        range,
        day_width,
        header,
        bars,
        content_width: range.expanded_days() * day_width as i64,
        primary_header_height: params.primary_header_height,
        secondary_header_height: params.secondary_header_height,
        rows_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::DefaultFormatter;
    use crate::core::rows::{RowSpec, RowTracker};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn params(level: ZoomLevel) -> SceneParams {
        SceneParams {
            zoom_level: level,
            zoom_factor: 1.0,
            primary_header_height: 24.0,
            secondary_header_height: 24.0,
        }
    }

    fn track_rows(tasks: &[TaskSpan]) -> Vec<RowMetrics> {
        let specs: Vec<RowSpec> = tasks
            .iter()
            .map(|t| RowSpec {
                row_id: t.id,
                height: 32.0,
                visible: true,
                expanded: false,
            })
            .collect();
        let mut tracker = RowTracker::new();
        tracker.rebuild(&specs);
        tracker.rows().to_vec()
    }

    #[test]
    fn test_scene_joins_bars_to_rows() {
        let tasks = [
            TaskSpan { id: Uuid::new_v4(), start: d(2025, 1, 6), end: d(2025, 1, 10) },
            TaskSpan { id: Uuid::new_v4(), start: d(2025, 1, 13), end: d(2025, 1, 13) },
        ];
        let rows = track_rows(&tasks);
        let scene = build_scene(
            &tasks,
            &rows,
            d(2025, 1, 6),
            d(2025, 1, 13),
            &params(ZoomLevel::DaysMedium),
            &DefaultFormatter,
        );

        assert_eq!(scene.day_width, 60);
        assert_eq!(scene.range.expanded_start, d(2025, 1, 1));
        assert_eq!(scene.bars.len(), 2);
        // Jan 6 is five days past the expanded origin.
        assert_eq!(scene.bars[0].x, 5 * 60);
        assert_eq!(scene.bars[0].width, 5 * 60);
        assert_eq!(scene.bars[0].row_top, 0.0);
        assert_eq!(scene.bars[1].width, 60);
        assert_eq!(scene.bars[1].row_top, 32.0);
        assert_eq!(scene.content_width, 31 * 60);
        assert_eq!(scene.rows_height, 64.0);
    }

    #[test]
    fn test_scene_skips_tasks_without_rows() {
        // A collapsed-away task has no visible row and therefore no bar.
        let shown = TaskSpan { id: Uuid::new_v4(), start: d(2025, 2, 3), end: d(2025, 2, 7) };
        let hidden = TaskSpan { id: Uuid::new_v4(), start: d(2025, 2, 3), end: d(2025, 2, 7) };
        let rows = track_rows(&[shown]);
        let scene = build_scene(
            &[shown, hidden],
            &rows,
            d(2025, 2, 3),
            d(2025, 2, 7),
            &params(ZoomLevel::WeeksMedium),
            &DefaultFormatter,
        );
        assert_eq!(scene.bars.len(), 1);
        assert_eq!(scene.bars[0].task_id, shown.id);
    }

    #[test]
    fn test_degenerate_range_normalizes_to_single_day() {
        let scene = build_scene(
            &[],
            &[],
            d(2025, 3, 10),
            d(2025, 3, 1),
            &params(ZoomLevel::DaysNarrow),
            &DefaultFormatter,
        );
        assert_eq!(scene.range.requested_start, scene.range.requested_end);
        assert_eq!(scene.range.expanded_start, d(2025, 3, 1));
        assert_eq!(scene.range.expanded_end, d(2025, 3, 31));
    }

    #[test]
    fn test_header_cells_mirror_periods() {
        let scene = build_scene(
            &[],
            &[],
            d(2025, 2, 1),
            d(2025, 4, 30),
            &params(ZoomLevel::MonthsMedium),
            &DefaultFormatter,
        );
        // Feb-Apr spans Q1 and Q2.
        let labels: Vec<&str> = scene.header.primary.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Q1 2025", "Q2 2025"]);
        assert_eq!(scene.header.secondary.len(), 6);
        assert!(scene.header.primary.iter().all(|c| c.diagnostic.is_none()));
        // Cells tile the full content width.
        let last = scene.header.secondary.last().unwrap();
        assert_eq!(last.x + last.width, scene.content_width);
    }

    #[test]
    fn test_placeholder_renderer_emits_diagnostic_cells() {
        let range = expand(d(2025, 1, 1), d(2025, 1, 31), HeaderPattern::MonthDay);
        let periods = generate(&range, HeaderPattern::MonthDay, 25, &DefaultFormatter);
        let cells = PLACEHOLDER.cells(&periods);
        assert_eq!(cells.primary.len(), 1);
        assert_eq!(cells.secondary.len(), 1);
        assert!(cells.primary[0].diagnostic.is_some());
        assert_eq!(cells.secondary[0].width, 31 * 25);
    }

    #[test]
    fn test_malformed_period_becomes_placeholder_cell() {
        let bad = HeaderPeriod {
            start: d(2025, 1, 1),
            end: d(2025, 1, 1),
            x: 0,
            width: 25,
            label: String::new(),
            tier: PeriodTier::Secondary,
        };
        let cells = TieredRenderer.cells(&GeneratedPeriods {
            primary: vec![],
            secondary: vec![bad],
        });
        assert_eq!(cells.secondary.len(), 1);
        assert!(cells.secondary[0].diagnostic.is_some());
    }
}
