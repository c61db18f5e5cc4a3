use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{BG_HOVER, BORDER_SUBTLE, ROW_INDENT_PX, TEXT_MUTED, TEXT_SECONDARY};

/// Task label row in the left column, with a disclosure toggle for parents.
/// Vertical position comes from the row tracker via the caller; this
/// component never computes its own offset.
#[component]
pub(crate) fn TaskLabel(
    task_id: Uuid,
    name: String,
    depth: usize,
    has_children: bool,
    expanded: bool,
    selected: bool,
    top: f64,
    height: f64,
    on_toggle: EventHandler<Uuid>,
    on_select: EventHandler<Uuid>,
) -> Element {
    let indent = depth as f64 * ROW_INDENT_PX + 8.0;
    let background = if selected { BG_HOVER } else { "transparent" };
    let toggle_icon = if expanded { "▼" } else { "▶" };

    rsx! {
        div {
            style: "
                position: absolute;
                top: {top}px;
                left: 0;
                right: 0;
                height: {height}px;
                display: flex; align-items: center; gap: 6px;
                padding-left: {indent}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
                box-sizing: border-box;
                font-size: 12px; color: {TEXT_SECONDARY};
                background-color: {background};
                cursor: pointer;
                user-select: none;
            ",
            onclick: move |e| {
                e.stop_propagation();
                on_select.call(task_id);
            },

            if has_children {
                span {
                    style: "font-size: 8px; color: {TEXT_MUTED}; width: 10px; cursor: pointer;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_toggle.call(task_id);
                    },
                    "{toggle_icon}"
                }
            } else {
                span { style: "width: 10px;" }
            }
            span {
                style: "white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{name}"
            }
        }
    }
}
