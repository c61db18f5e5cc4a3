use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{
    BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, TASK_COLUMN_WIDTH, TEXT_DIM, TEXT_MUTED,
};
use crate::core::scene::ChartScene;
use crate::core::zoom::{level_display_name, ZoomLevel};

use super::header::TimeAxisHeader;
use super::task_label::TaskLabel;
use super::task_row::TaskRow;
use super::LabelRow;

/// Main Gantt panel: fixed task-label column on the left, horizontally
/// scrollable time axis on the right. Both sides position rows from the same
/// tracker-derived tops carried in `labels` and `scene.bars`.
#[component]
pub fn GanttPanel(
    scene: ChartScene,
    labels: Vec<LabelRow>,
    selected_tasks: Vec<Uuid>,
    zoom_level: ZoomLevel,
    can_zoom_in: bool,
    can_zoom_out: bool,
    on_zoom_in: EventHandler<MouseEvent>,
    on_zoom_out: EventHandler<MouseEvent>,
    on_toggle_expand: EventHandler<Uuid>,
    on_task_select: EventHandler<Uuid>,
    on_export: EventHandler<MouseEvent>,
    on_deselect_all: EventHandler<MouseEvent>,
) -> Element {
    let header_height = scene.header_height();
    let rows_height = scene.rows_height;
    let content_width = scene.content_width;
    let zoom_label = level_display_name(zoom_level);
    let range_label = format!(
        "{} – {}",
        scene.range.expanded_start.format("%b %-d, %Y"),
        scene.range.expanded_end.format("%b %-d, %Y"),
    );

    // Join bar geometry with label metadata for bar rendering.
    let bars: Vec<_> = scene
        .bars
        .iter()
        .map(|bar| {
            let label = labels.iter().find(|l| l.task_id == bar.task_id);
            (
                *bar,
                label.map(|l| l.name.clone()).unwrap_or_default(),
                label.map(|l| l.has_children).unwrap_or(false),
            )
        })
        .collect();

    rsx! {
        div {
            style: "
                flex: 1; display: flex; flex-direction: column;
                background-color: {BG_ELEVATED};
                overflow: hidden;
            ",

            // Toolbar: plan range, zoom controls, export
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",

                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span {
                        style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                        "Timeline"
                    }
                    span {
                        style: "font-size: 10px; color: {TEXT_DIM};",
                        "{range_label}"
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    ToolbarBtn {
                        label: "−",
                        enabled: can_zoom_out,
                        on_click: move |e| on_zoom_out.call(e),
                    }
                    span {
                        style: "font-size: 10px; color: {TEXT_DIM}; min-width: 56px; text-align: center;",
                        "{zoom_label}"
                    }
                    ToolbarBtn {
                        label: "+",
                        enabled: can_zoom_in,
                        on_click: move |e| on_zoom_in.call(e),
                    }
                    span {
                        style: "font-size: 10px; color: {TEXT_DIM}; margin-left: 4px;",
                        "{scene.day_width}px/day"
                    }
                    ToolbarBtn {
                        label: "Export SVG",
                        enabled: true,
                        on_click: move |e| on_export.call(e),
                    }
                }
            }

            // Chart body: fixed label column + scrollable axis
            div {
                style: "flex: 1; display: flex; overflow: hidden;",
                onclick: move |e| on_deselect_all.call(e),

                // ═══════════════════════════════════════════════════════════
                // LEFT COLUMN - fixed width, never scrolls horizontally
                // ═══════════════════════════════════════════════════════════
                div {
                    style: "
                        width: {TASK_COLUMN_WIDTH}px;
                        min-width: {TASK_COLUMN_WIDTH}px;
                        flex-shrink: 0;
                        display: flex; flex-direction: column;
                        background-color: {BG_ELEVATED};
                        border-right: 1px solid {BORDER_DEFAULT};
                        z-index: 20;
                    ",

                    // Corner cell above the labels, same height as the axis header
                    div {
                        style: "
                            height: {header_height}px;
                            flex-shrink: 0;
                            border-bottom: 1px solid {BORDER_DEFAULT};
                            background-color: {BG_SURFACE};
                            box-sizing: border-box;
                            display: flex; align-items: center; padding: 0 12px;
                            font-size: 10px; color: {TEXT_MUTED};
                        ",
                        "Task"
                    }

                    div {
                        style: "flex: 1; overflow: hidden; position: relative; height: {rows_height}px;",
                        for row in labels.iter() {
                            TaskLabel {
                                key: "{row.task_id}",
                                task_id: row.task_id,
                                name: row.name.clone(),
                                depth: row.depth,
                                has_children: row.has_children,
                                expanded: row.expanded,
                                selected: selected_tasks.contains(&row.task_id),
                                top: row.top,
                                height: row.height,
                                on_toggle: move |id| on_toggle_expand.call(id),
                                on_select: move |id| on_task_select.call(id),
                            }
                        }
                    }
                }

                // ═══════════════════════════════════════════════════════════
                // RIGHT COLUMN - single scroll container for header + rows;
                // the header is sticky so it scrolls horizontally with the
                // rows but stays pinned vertically
                // ═══════════════════════════════════════════════════════════
                div {
                    style: "flex: 1; overflow: auto; position: relative;",

                    div {
                        style: "
                            min-width: {content_width}px;
                            display: flex; flex-direction: column;
                            position: relative;
                        ",

                        div {
                            style: "position: sticky; top: 0; z-index: 15;",
                            TimeAxisHeader {
                                primary: scene.header.primary.clone(),
                                secondary: scene.header.secondary.clone(),
                                primary_height: scene.primary_header_height,
                                secondary_height: scene.secondary_header_height,
                                content_width: content_width,
                            }
                        }

                        div {
                            style: "position: relative; height: {rows_height}px; width: {content_width}px;",
                            for (bar, name, summary) in bars.iter() {
                                TaskRow {
                                    key: "{bar.task_id}",
                                    bar: *bar,
                                    name: name.clone(),
                                    summary: *summary,
                                    selected: selected_tasks.contains(&bar.task_id),
                                    content_width: content_width,
                                    on_select: move |id| on_task_select.call(id),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Small toolbar button
#[component]
fn ToolbarBtn(label: &'static str, enabled: bool, on_click: EventHandler<MouseEvent>) -> Element {
    let color = if enabled { TEXT_MUTED } else { TEXT_DIM };
    let cursor = if enabled { "pointer" } else { "default" };

    rsx! {
        button {
            style: "
                height: 20px; padding: 0 6px; border: none; border-radius: 3px;
                background: transparent; color: {color}; font-size: 11px;
                cursor: {cursor};
                display: flex; align-items: center; justify-content: center;
            ",
            disabled: !enabled,
            onclick: move |e| {
                e.stop_propagation();
                if enabled {
                    on_click.call(e);
                }
            },
            "{label}"
        }
    }
}
