//! Plan data model
//!
//! This module contains the core data structures for a project plan:
//! - Plan: The top-level container
//! - Task: A scheduled item, optionally nested under a parent task
//! - VisibleRow: One entry of the flattened, expansion-aware row order

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

// =============================================================================
// Tasks
// =============================================================================

/// A scheduled task. Dates are timezone-free calendar dates and the end date
/// is inclusive: a task starting and ending on the same day lasts one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier; doubles as the row identity in the chart.
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// First scheduled day
    pub start: NaiveDate,
    /// Last scheduled day (inclusive)
    pub end: NaiveDate,
    /// Parent task for hierarchical plans; None for top-level tasks
    pub parent_id: Option<Uuid>,
    /// Whether this task's children are shown
    pub expanded: bool,
}

impl Task {
    /// Create a new top-level task
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start,
            end: end.max(start),
            parent_id: None,
            expanded: true,
        }
    }

    /// Create a task nested under a parent
    pub fn child_of(parent_id: Uuid, name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(name, start, end)
        }
    }

    /// Scheduled duration in whole days (end inclusive)
    #[allow(dead_code)]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

// =============================================================================
// Flattened rows
// =============================================================================

/// One visible row of the flattened hierarchy, in display order.
/// The chart consumes this ordering; it never computes hierarchy itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    /// Task backing this row
    pub task_id: Uuid,
    /// Nesting depth (0 for top-level tasks)
    pub depth: usize,
    /// Whether the task has children (shows a disclosure toggle)
    pub has_children: bool,
    /// Expansion state carried through for the row tracker
    pub expanded: bool,
}

// =============================================================================
// Plan
// =============================================================================

/// The main plan container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Schema version for future compatibility
    pub version: String,
    /// Plan name
    pub name: String,
    /// All tasks, top-level ones in display order
    pub tasks: Vec<Task>,

    /// Path to the plan file's folder (not serialized - set on load)
    #[serde(skip)]
    pub plan_path: Option<PathBuf>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: "Untitled Plan".to_string(),
            tasks: Vec::new(),
            plan_path: None,
        }
    }
}

impl Plan {
    /// Create a new empty plan
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A small starter plan so a fresh window is not empty
    pub fn sample() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let mut plan = Plan::new("Sample Plan");
        let design = Task::new("Design", d(2025, 2, 3), d(2025, 3, 14));
        let design_id = design.id;
        plan.tasks.push(design);
        plan.tasks.push(Task::child_of(design_id, "Wireframes", d(2025, 2, 3), d(2025, 2, 14)));
        plan.tasks.push(Task::child_of(design_id, "Visual design", d(2025, 2, 17), d(2025, 3, 14)));
        let build = Task::new("Build", d(2025, 3, 10), d(2025, 6, 27));
        let build_id = build.id;
        plan.tasks.push(build);
        plan.tasks.push(Task::child_of(build_id, "Backend", d(2025, 3, 10), d(2025, 5, 16)));
        plan.tasks.push(Task::child_of(build_id, "Frontend", d(2025, 4, 7), d(2025, 6, 27)));
        plan.tasks.push(Task::new("Launch", d(2025, 6, 30), d(2025, 7, 11)));
        plan
    }

    /// Find a task by ID
    pub fn find_task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by ID, mutably
    pub fn find_task_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Whether a task has at least one child
    pub fn has_children(&self, id: Uuid) -> bool {
        self.tasks.iter().any(|t| t.parent_id == Some(id))
    }

    /// Direct children of a task, in display order
    pub fn children_of(&self, id: Uuid) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.parent_id == Some(id)).collect()
    }

    /// Overall scheduled range of the plan, if it has any tasks
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.tasks.iter().map(|t| t.start).min()?;
        let end = self.tasks.iter().map(|t| t.end).max()?;
        Some((start, end))
    }

    /// Flatten the hierarchy into the visible row order: depth-first over
    /// top-level tasks, descending only into expanded parents. This ordering
    /// is the single row-identity source for both chart panels.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        for task in self.tasks.iter().filter(|t| t.parent_id.is_none()) {
            self.push_row(task, 0, &mut rows);
        }
        rows
    }

    fn push_row(&self, task: &Task, depth: usize, rows: &mut Vec<VisibleRow>) {
        let has_children = self.has_children(task.id);
        rows.push(VisibleRow {
            task_id: task.id,
            depth,
            has_children,
            expanded: task.expanded,
        });
        if has_children && task.expanded {
            for child in self.children_of(task.id) {
                self.push_row(child, depth + 1, rows);
            }
        }
    }

    /// Toggle a task's expansion state; true if the task exists and has
    /// children (leaf toggles are a no-op)
    pub fn toggle_expanded(&mut self, id: Uuid) -> bool {
        if !self.has_children(id) {
            return false;
        }
        if let Some(task) = self.find_task_mut(id) {
            task.expanded = !task.expanded;
            return true;
        }
        false
    }

    /// Add a task to the plan
    #[allow(dead_code)]
    pub fn add_task(&mut self, task: Task) -> Uuid {
        let id = task.id;
        self.tasks.push(task);
        id
    }

    /// Remove a task and all of its descendants
    #[allow(dead_code)]
    pub fn remove_task(&mut self, id: Uuid) -> bool {
        let to_remove = self.collect_subtree(id);
        if to_remove.is_empty() {
            return false;
        }
        self.tasks.retain(|t| !to_remove.contains(&t.id));
        true
    }

    /// Make a task a child of its previous sibling. Returns false when the
    /// task has no previous sibling to indent under.
    #[allow(dead_code)]
    pub fn indent_task(&mut self, id: Uuid) -> bool {
        let Some(task) = self.find_task(id) else {
            return false;
        };
        let parent_id = task.parent_id;
        let siblings: Vec<Uuid> = self
            .tasks
            .iter()
            .filter(|t| t.parent_id == parent_id)
            .map(|t| t.id)
            .collect();
        let Some(pos) = siblings.iter().position(|s| *s == id) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        let new_parent = siblings[pos - 1];
        if let Some(task) = self.find_task_mut(id) {
            task.parent_id = Some(new_parent);
            return true;
        }
        false
    }

    fn collect_subtree(&self, id: Uuid) -> Vec<Uuid> {
        if self.find_task(id).is_none() {
            return Vec::new();
        }
        let mut ids = vec![id];
        let mut i = 0;
        while i < ids.len() {
            let parent = ids[i];
            ids.extend(
                self.tasks
                    .iter()
                    .filter(|t| t.parent_id == Some(parent))
                    .map(|t| t.id),
            );
            i += 1;
        }
        ids
    }

    // =========================================================================
    // Save/Load
    // =========================================================================

    /// Save the plan to its folder
    pub fn save(&self) -> io::Result<()> {
        let path = self.plan_path.as_ref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Plan path not set")
        })?;
        self.save_to(path)
    }

    /// Save the plan to a specific folder
    pub fn save_to(&self, folder: &Path) -> io::Result<()> {
        fs::create_dir_all(folder)?;
        fs::create_dir_all(folder.join("exports"))?;

        let json = serde_json::to_string_pretty(self)?;
        fs::write(folder.join("plan.json"), json)?;

        Ok(())
    }

    /// Load a plan from a folder
    #[allow(dead_code)]
    pub fn load(folder: &Path) -> io::Result<Self> {
        let plan_file = folder.join("plan.json");
        let json = fs::read_to_string(&plan_file)?;
        let mut plan: Plan = serde_json::from_str(&json)?;
        plan.plan_path = Some(folder.to_path_buf());
        Ok(plan)
    }
}
