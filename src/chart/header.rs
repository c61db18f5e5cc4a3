use dioxus::prelude::*;

use crate::constants::{
    ACCENT_PLACEHOLDER, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::core::scene::HeaderCell;

/// Two-tier time axis header.
/// All cells use pointer-events: none so clicks pass through to the parent;
/// the panel owns click-to-date behavior.
#[component]
pub(crate) fn TimeAxisHeader(
    primary: Vec<HeaderCell>,
    secondary: Vec<HeaderCell>,
    primary_height: f64,
    secondary_height: f64,
    content_width: i64,
) -> Element {
    let total_height = primary_height + secondary_height;

    rsx! {
        div {
            style: "
                position: relative;
                width: {content_width}px;
                height: {total_height}px;
                background-color: {BG_SURFACE};
                border-bottom: 1px solid {BORDER_DEFAULT};
                pointer-events: none;
            ",

            for (i, header_cell) in primary.iter().enumerate() {
                HeaderCellBox {
                    key: "p-{i}",
                    cell: header_cell.clone(),
                    top: 0.0,
                    height: primary_height,
                    color: TEXT_SECONDARY,
                    font_size: 11,
                }
            }

            for (i, header_cell) in secondary.iter().enumerate() {
                HeaderCellBox {
                    key: "s-{i}",
                    cell: header_cell.clone(),
                    top: primary_height,
                    height: secondary_height,
                    color: TEXT_MUTED,
                    font_size: 10,
                }
            }
        }
    }
}

/// One header cell: background box with a centered label. Placeholder cells
/// (failed periods, unregistered levels) render dimmed with the diagnostic in
/// the tooltip instead of blanking the header.
#[component]
fn HeaderCellBox(cell: HeaderCell, top: f64, height: f64, color: &'static str, font_size: u32) -> Element {
    let border = if cell.diagnostic.is_some() {
        format!("1px dashed {ACCENT_PLACEHOLDER}")
    } else {
        format!("1px solid {BORDER_SUBTLE}")
    };
    let title = cell.diagnostic.clone().unwrap_or_default();

    rsx! {
        div {
            title: "{title}",
            style: "
                position: absolute;
                left: {cell.x}px;
                top: {top}px;
                width: {cell.width}px;
                height: {height}px;
                border-right: {border};
                box-sizing: border-box;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                white-space: nowrap;
                font-size: {font_size}px;
                color: {color};
                user-select: none;
            ",
            "{cell.label}"
        }
    }
}
