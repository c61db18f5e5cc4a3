use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{
    ACCENT_SUMMARY, ACCENT_TASK, BAR_VERTICAL_INSET, BG_BASE, BG_ELEVATED, BORDER_ACCENT,
    BORDER_SUBTLE, TEXT_SECONDARY,
};
use crate::core::scene::TaskBar;

/// One chart row with its task bar. The row's top and height come from the
/// shared row tracker (already baked into `bar`), so this lines up with the
/// label column at every scroll position.
#[component]
pub(crate) fn TaskRow(
    bar: TaskBar,
    name: String,
    summary: bool,
    selected: bool,
    content_width: i64,
    on_select: EventHandler<Uuid>,
) -> Element {
    let accent = if summary { ACCENT_SUMMARY } else { ACCENT_TASK };
    let border = if selected {
        format!("1px solid {BORDER_ACCENT}")
    } else {
        format!("1px solid {accent}")
    };
    let bar_top = BAR_VERTICAL_INSET;
    let bar_height = (bar.row_height - 2.0 * BAR_VERTICAL_INSET).max(4.0);
    let task_id = bar.task_id;

    rsx! {
        div {
            style: "
                position: absolute;
                top: {bar.row_top}px;
                left: 0;
                height: {bar.row_height}px;
                width: {content_width}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
                box-sizing: border-box;
                background-color: {BG_BASE};
            ",

            div {
                style: "
                    position: absolute;
                    left: {bar.x}px;
                    top: {bar_top}px;
                    width: {bar.width}px;
                    height: {bar_height}px;
                    background-color: {BG_ELEVATED};
                    border: {border};
                    border-radius: 4px;
                    display: flex;
                    align-items: center;
                    padding: 0 6px;
                    box-sizing: border-box;
                    overflow: hidden;
                    cursor: pointer;
                    user-select: none;
                ",
                onclick: move |e| {
                    e.stop_propagation();
                    on_select.call(task_id);
                },
                // Color indicator bar
                div {
                    style: "width: 3px; height: 60%; border-radius: 2px; background-color: {accent}; flex-shrink: 0; margin-right: 6px;",
                }
                span {
                    style: "font-size: 10px; color: {TEXT_SECONDARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{name}"
                }
            }
        }
    }
}
