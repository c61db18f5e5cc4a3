//! Gantt Planner
//!
//! A local-first project timeline editor with a zoomable multi-tier Gantt chart.

mod app;
mod chart;
mod constants;
mod core;
mod hotkeys;
mod state;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Gantt Planner")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
