//! Root application component
//!
//! This defines the main App component and the overall layout structure.
//! All chart geometry is recomputed from the plan/zoom signals on discrete
//! state changes; the row tracker is the single vertical-metrics source both
//! the task column and the chart rows read from.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::chart::{render_svg, GanttPanel, LabelRow};
use crate::constants::{
    BG_BASE, BG_SURFACE, BORDER_DEFAULT, PRIMARY_HEADER_HEIGHT, ROW_HEIGHT,
    SECONDARY_HEADER_HEIGHT, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::core::format::DefaultFormatter;
use crate::core::rows::{RowSpec, RowTracker};
use crate::core::scene::{build_scene, ChartScene, SceneParams, TaskSpan};
use crate::core::zoom::{zoom_in_level, zoom_out_level, ZoomLevel, DEFAULT_LEVEL};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{Plan, SelectionState};

/// Preset-only zoom policy: the factor is pinned to 1.0 and the zoom level
/// is the only lever.
const ZOOM_FACTOR: f64 = 1.0;

/// Row specs for the tracker, in the plan's flattened visible order.
fn row_specs(plan: &Plan) -> Vec<RowSpec> {
    plan.visible_rows()
        .iter()
        .map(|row| RowSpec {
            row_id: row.task_id,
            height: ROW_HEIGHT,
            visible: true,
            expanded: row.expanded,
        })
        .collect()
}

/// Build the chart scene and label rows for the current state.
fn build_chart(
    plan: &Plan,
    tracker: &RowTracker,
    zoom_level: ZoomLevel,
) -> (ChartScene, Vec<LabelRow>) {
    let tasks: Vec<TaskSpan> = plan
        .tasks
        .iter()
        .map(|t| TaskSpan { id: t.id, start: t.start, end: t.end })
        .collect();
    let today = chrono::Local::now().date_naive();
    let (range_start, range_end) = plan.date_range().unwrap_or((today, today));
    let params = SceneParams {
        zoom_level,
        zoom_factor: ZOOM_FACTOR,
        primary_header_height: PRIMARY_HEADER_HEIGHT,
        secondary_header_height: SECONDARY_HEADER_HEIGHT,
    };
    let scene = build_scene(
        &tasks,
        tracker.rows(),
        range_start,
        range_end,
        &params,
        &DefaultFormatter,
    );

    let labels: Vec<LabelRow> = plan
        .visible_rows()
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let metrics = tracker.row(index)?;
            let task = plan.find_task(row.task_id)?;
            Some(LabelRow {
                task_id: row.task_id,
                name: task.name.clone(),
                depth: row.depth,
                has_children: row.has_children,
                expanded: row.expanded,
                top: metrics.top,
                height: metrics.height,
            })
        })
        .collect();

    (scene, labels)
}

pub fn App() -> Element {
    let mut plan = use_signal(Plan::sample);
    let mut selection = use_signal(SelectionState::default);
    let mut zoom_level = use_signal(|| DEFAULT_LEVEL);
    let mut row_tracker = use_signal(RowTracker::new);

    // Any plan change (task set or expansion state) triggers one full row
    // metrics rebuild; the tracker emits a single notification per rebuild.
    use_effect(move || {
        let specs = row_specs(&plan.read());
        row_tracker.write().rebuild(&specs);
    });

    let (scene, labels) = {
        let plan_read = plan.read();
        let tracker_read = row_tracker.read();
        build_chart(&plan_read, &tracker_read, zoom_level())
    };

    let level = zoom_level();
    let can_step_in = zoom_in_level(level) != level;
    let can_step_out = zoom_out_level(level) != level;
    let plan_name = plan.read().name.clone();
    let task_count = plan.read().tasks.len();
    let selected = selection.read().task_ids.clone();

    let export_svg = move || {
        let plan_read = plan.read();
        let tracker_read = row_tracker.read();
        let (scene, labels) = build_chart(&plan_read, &tracker_read, zoom_level());
        let svg = render_svg(&scene, &labels);
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Export Chart as SVG")
            .set_file_name("plan.svg")
            .save_file()
        {
            if let Err(err) = std::fs::write(&path, svg) {
                eprintln!("Failed to export SVG to {}: {err}", path.display());
            }
        }
    };

    let mut save_plan = move || {
        let needs_path = plan.read().plan_path.is_none();
        if needs_path {
            if let Some(folder) = rfd::FileDialog::new()
                .set_title("Save Plan")
                .pick_folder()
            {
                plan.write().plan_path = Some(folder);
            } else {
                return;
            }
        }
        if let Err(err) = plan.read().save() {
            eprintln!("Failed to save plan: {err}");
        }
    };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE};
                color: {TEXT_PRIMARY};
                font-family: -apple-system, 'Segoe UI', sans-serif;
                overflow: hidden;
            ",
            tabindex: 0,
            onkeydown: move |e: KeyboardEvent| {
                // Build context for hotkey dispatch
                let hotkey_context = HotkeyContext {
                    has_selection: !selection.read().task_ids.is_empty(),
                    input_focused: false,
                };

                let modifiers = e.modifiers();
                let shift = modifiers.shift();
                let ctrl = modifiers.ctrl();
                let alt = modifiers.alt();
                let meta = modifiers.meta();

                match handle_hotkey(&e.key(), shift, ctrl, alt, meta, &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::ChartZoomIn => {
                                let next = zoom_in_level(zoom_level());
                                zoom_level.set(next);
                            }
                            HotkeyAction::ChartZoomOut => {
                                let next = zoom_out_level(zoom_level());
                                zoom_level.set(next);
                            }
                            HotkeyAction::SavePlan => save_plan(),
                            HotkeyAction::ExportSvg => export_svg(),
                            HotkeyAction::ToggleExpandSelection => {
                                let target = selection.read().primary_task();
                                if let Some(id) = target {
                                    plan.write().toggle_expanded(id);
                                }
                            }
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            // Title bar
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 36px; padding: 0 14px;
                    background-color: {BG_SURFACE};
                    border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                span { style: "font-size: 12px; font-weight: 600;", "{plan_name}" }
                span {
                    style: "font-size: 10px; color: {TEXT_MUTED};",
                    "{task_count} tasks"
                }
            }

            GanttPanel {
                scene: scene,
                labels: labels,
                selected_tasks: selected,
                zoom_level: level,
                can_zoom_in: can_step_in,
                can_zoom_out: can_step_out,
                on_zoom_in: move |_| {
                    let next = zoom_in_level(zoom_level());
                    zoom_level.set(next);
                },
                on_zoom_out: move |_| {
                    let next = zoom_out_level(zoom_level());
                    zoom_level.set(next);
                },
                on_toggle_expand: move |id: Uuid| {
                    plan.write().toggle_expanded(id);
                },
                on_task_select: move |id: Uuid| {
                    selection.write().select_task(id);
                },
                on_export: move |_| export_svg(),
                on_deselect_all: move |_| selection.write().clear(),
            }

            // Status bar
            div {
                style: "
                    display: flex; align-items: center; gap: 12px;
                    height: 24px; padding: 0 14px;
                    background-color: {BG_SURFACE};
                    border-top: 1px solid {BORDER_DEFAULT};
                    font-size: 10px; color: {TEXT_DIM};
                    flex-shrink: 0;
                ",
                span { "Zoom: +/-  ·  Save: Ctrl+S  ·  Export: Ctrl+E" }
            }
        }
    }
}
