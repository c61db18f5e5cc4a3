//! Static SVG export of the chart.
//!
//! Renders the same `ChartScene` the interactive panel shows, into a
//! standalone SVG document: identical header cells, identical bar geometry,
//! no hover/selection/scroll wiring. Suitable for embedding in documents.

use crate::constants::{
    ACCENT_PLACEHOLDER, ACCENT_SUMMARY, ACCENT_TASK, BAR_VERTICAL_INSET, BG_BASE, BG_ELEVATED,
    BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, ROW_INDENT_PX, TASK_COLUMN_WIDTH, TEXT_MUTED,
    TEXT_SECONDARY,
};
use crate::core::scene::{ChartScene, HeaderCell};

use super::LabelRow;

/// Render a scene to a complete SVG document string.
///
/// The chart area is translated right by the label column width, so every
/// x coordinate inside it is the same number the interactive panel uses.
pub fn render_svg(scene: &ChartScene, labels: &[LabelRow]) -> String {
    let header_height = scene.header_height();
    let total_width = TASK_COLUMN_WIDTH + scene.content_width as f64;
    let total_height = header_height + scene.rows_height;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_width}" height="{total_height}" viewBox="0 0 {total_width} {total_height}" font-family="sans-serif">"#,
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect width="100%" height="100%" fill="{BG_BASE}"/>"#,
    ));
    svg.push('\n');

    render_label_column(&mut svg, labels, header_height, total_height);

    // Chart area shares the interactive panel's coordinate space.
    svg.push_str(&format!(
        r#"  <g transform="translate({TASK_COLUMN_WIDTH},0)">"#,
    ));
    svg.push('\n');
    render_header(&mut svg, scene);
    render_rows(&mut svg, scene, labels, header_height);
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");
    svg
}

fn render_label_column(svg: &mut String, labels: &[LabelRow], header_height: f64, total_height: f64) {
    svg.push_str(&format!(
        r#"  <rect x="0" y="0" width="{TASK_COLUMN_WIDTH}" height="{header_height}" fill="{BG_SURFACE}"/>"#,
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <text x="12" y="{y}" font-size="10" fill="{TEXT_MUTED}">Task</text>"#,
        y = header_height / 2.0 + 3.0,
    ));
    svg.push('\n');

    for row in labels {
        let top = header_height + row.top;
        let indent = row.depth as f64 * ROW_INDENT_PX + 12.0;
        svg.push_str(&format!(
            r#"  <line x1="0" y1="{y}" x2="{TASK_COLUMN_WIDTH}" y2="{y}" stroke="{BORDER_SUBTLE}" stroke-width="1"/>"#,
            y = top + row.height,
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{indent}" y="{y}" font-size="12" fill="{TEXT_SECONDARY}">{name}</text>"#,
            y = top + row.height / 2.0 + 4.0,
            name = xml_escape(&row.name),
        ));
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"  <line x1="{TASK_COLUMN_WIDTH}" y1="0" x2="{TASK_COLUMN_WIDTH}" y2="{total_height}" stroke="{BORDER_DEFAULT}" stroke-width="1"/>"#,
    ));
    svg.push('\n');
}

fn render_header(svg: &mut String, scene: &ChartScene) {
    svg.push_str(&format!(
        r#"    <rect x="0" y="0" width="{w}" height="{h}" fill="{BG_SURFACE}"/>"#,
        w = scene.content_width,
        h = scene.header_height(),
    ));
    svg.push('\n');

    for cell in &scene.header.primary {
        render_header_cell(svg, cell, 0.0, scene.primary_header_height, 11);
    }
    for cell in &scene.header.secondary {
        render_header_cell(
            svg,
            cell,
            scene.primary_header_height,
            scene.secondary_header_height,
            10,
        );
    }

    svg.push_str(&format!(
        r#"    <line x1="0" y1="{y}" x2="{w}" y2="{y}" stroke="{BORDER_DEFAULT}" stroke-width="1"/>"#,
        y = scene.header_height(),
        w = scene.content_width,
    ));
    svg.push('\n');
}

fn render_header_cell(svg: &mut String, cell: &HeaderCell, top: f64, height: f64, font_size: u32) {
    let stroke = if cell.diagnostic.is_some() {
        ACCENT_PLACEHOLDER
    } else {
        BORDER_SUBTLE
    };
    svg.push_str(&format!(
        r#"    <rect x="{x}" y="{top}" width="{w}" height="{height}" fill="none" stroke="{stroke}" stroke-width="1"/>"#,
        x = cell.x,
        w = cell.width,
    ));
    svg.push('\n');
    if !cell.label.is_empty() {
        svg.push_str(&format!(
            r#"    <text x="{x}" y="{y}" font-size="{font_size}" fill="{TEXT_SECONDARY}" text-anchor="middle">{label}</text>"#,
            x = cell.x as f64 + cell.width as f64 / 2.0,
            y = top + height / 2.0 + 3.5,
            label = xml_escape(&cell.label),
        ));
        svg.push('\n');
    }
}

fn render_rows(svg: &mut String, scene: &ChartScene, labels: &[LabelRow], header_height: f64) {
    for bar in &scene.bars {
        let label = labels.iter().find(|l| l.task_id == bar.task_id);
        let summary = label.map(|l| l.has_children).unwrap_or(false);
        let accent = if summary { ACCENT_SUMMARY } else { ACCENT_TASK };
        let row_top = header_height + bar.row_top;

        svg.push_str(&format!(
            r#"    <line x1="0" y1="{y}" x2="{w}" y2="{y}" stroke="{BORDER_SUBTLE}" stroke-width="1"/>"#,
            y = row_top + bar.row_height,
            w = scene.content_width,
        ));
        svg.push('\n');

        let bar_height = (bar.row_height - 2.0 * BAR_VERTICAL_INSET).max(4.0);
        svg.push_str(&format!(
            r#"    <rect x="{x}" y="{y}" width="{w}" height="{h}" rx="4" fill="{BG_ELEVATED}" stroke="{accent}" stroke-width="1"/>"#,
            x = bar.x,
            y = row_top + BAR_VERTICAL_INSET,
            w = bar.width,
            h = bar_height,
        ));
        svg.push('\n');

        if let Some(label) = label {
            svg.push_str(&format!(
                r#"    <text x="{x}" y="{y}" font-size="10" fill="{TEXT_SECONDARY}">{name}</text>"#,
                x = bar.x + 8,
                y = row_top + bar.row_height / 2.0 + 3.5,
                name = xml_escape(&label.name),
            ));
            svg.push('\n');
        }
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::DefaultFormatter;
    use crate::core::rows::{RowSpec, RowTracker};
    use crate::core::scene::{build_scene, SceneParams, TaskSpan};
    use crate::core::zoom::ZoomLevel;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> (ChartScene, Vec<LabelRow>) {
        let task = TaskSpan {
            id: Uuid::new_v4(),
            start: d(2025, 1, 6),
            end: d(2025, 1, 10),
        };
        let mut tracker = RowTracker::new();
        tracker.rebuild(&[RowSpec {
            row_id: task.id,
            height: 32.0,
            visible: true,
            expanded: false,
        }]);
        let params = SceneParams {
            zoom_level: ZoomLevel::DaysMedium,
            zoom_factor: 1.0,
            primary_header_height: 24.0,
            secondary_header_height: 24.0,
        };
        let scene = build_scene(
            &[task],
            tracker.rows(),
            d(2025, 1, 6),
            d(2025, 1, 10),
            &params,
            &DefaultFormatter,
        );
        let labels = vec![LabelRow {
            task_id: task.id,
            name: "Kickoff & prep".to_string(),
            depth: 0,
            has_children: false,
            expanded: false,
            top: 0.0,
            height: 32.0,
        }];
        (scene, labels)
    }

    #[test]
    fn test_svg_is_well_formed_enough() {
        let (scene, labels) = sample();
        let svg = render_svg(&scene, &labels);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<svg").count(), 1);
    }

    #[test]
    fn test_svg_contains_header_labels_and_escaped_names() {
        let (scene, labels) = sample();
        let svg = render_svg(&scene, &labels);
        assert!(svg.contains("January 2025"));
        // Task name is escaped, never raw.
        assert!(svg.contains("Kickoff &amp; prep"));
        assert!(!svg.contains("Kickoff & prep"));
    }

    #[test]
    fn test_svg_uses_scene_geometry_verbatim() {
        let (scene, labels) = sample();
        let svg = render_svg(&scene, &labels);
        let bar = &scene.bars[0];
        // The exported bar carries the exact same x/width the interactive
        // panel renders.
        assert!(svg.contains(&format!(r#"<rect x="{}" y="{}" width="{}""#,
            bar.x,
            scene.header_height() + bar.row_top + BAR_VERTICAL_INSET,
            bar.width,
        )));
    }
}
