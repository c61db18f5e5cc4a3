//! Timeline engine.
//!
//! Pure geometry and bookkeeping for the Gantt chart: zoom catalog,
//! date/pixel mapping, header period generation, row alignment, and scene
//! assembly. Nothing in here depends on Dioxus; the interactive panel and
//! the SVG exporter both render from the same engine output.

pub mod calendar;
pub mod coords;
pub mod format;
pub mod periods;
pub mod rows;
pub mod scene;
pub mod zoom;
