//! Gantt chart components
//!
//! The interactive panel and the static SVG exporter both render from the
//! same engine-built `ChartScene`; the components here only position boxes
//! and labels, never compute dates or row offsets themselves.

mod export;
mod header;
mod panel;
mod task_label;
mod task_row;

pub use export::render_svg;
pub use panel::GanttPanel;

use uuid::Uuid;

/// One row of the task-label column, joined from the plan's visible row
/// order and the row tracker's metrics. `top`/`height` come from the same
/// tracker table the chart rows use, which is what keeps the two panels
/// vertically aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    pub task_id: Uuid,
    pub name: String,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub top: f64,
    pub height: f64,
}
