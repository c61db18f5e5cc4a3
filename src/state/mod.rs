//! State management module
//!
//! This module contains all the core data structures for the application:
//! - Plan: The top-level container for a project plan
//! - Task: Scheduled items, optionally nested for hierarchical plans
//! - VisibleRow: The flattened, expansion-aware row ordering
//! - SelectionState: Current selection across the table and chart

mod project;
mod selection;

pub use project::*;
pub use selection::*;
