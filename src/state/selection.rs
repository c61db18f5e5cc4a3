//! Selection state shared across views.

use uuid::Uuid;

/// Tracks the current selection across the task table and the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selected task IDs, in selection order.
    pub task_ids: Vec<Uuid>,
}

impl SelectionState {
    /// Clear the selection.
    pub fn clear(&mut self) {
        self.task_ids.clear();
    }

    /// Replace the selection with a single task.
    pub fn select_task(&mut self, task_id: Uuid) {
        self.task_ids.clear();
        self.task_ids.push(task_id);
    }

    /// Add or remove a task from the selection (ctrl-click behavior).
    #[allow(dead_code)]
    pub fn toggle_task(&mut self, task_id: Uuid) {
        if self.is_selected(task_id) {
            self.task_ids.retain(|id| *id != task_id);
        } else {
            self.task_ids.push(task_id);
        }
    }

    /// Whether a task is currently selected.
    #[allow(dead_code)]
    pub fn is_selected(&self, task_id: Uuid) -> bool {
        self.task_ids.contains(&task_id)
    }

    /// Return the primary selected task, if any.
    pub fn primary_task(&self) -> Option<Uuid> {
        self.task_ids.first().copied()
    }
}
