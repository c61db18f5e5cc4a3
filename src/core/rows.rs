//! Row alignment tracker.
//!
//! Single source of truth for per-row vertical metrics, shared by the task
//! table and the chart panel. Both panels read row tops from the same tracker
//! instance; neither computes heights on its own, which is what keeps the two
//! panels pixel-aligned through scrolling, zooming, and expand/collapse.
//!
//! Any change rebuilds the whole table from index 0 (height changes cascade
//! to every row below the change point) and emits exactly one notification
//! carrying the new table, so subscribers never observe a partially updated
//! state and never re-render once per row.

use uuid::Uuid;

/// Caller-supplied input for one row, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpec {
    /// Stable identity of the row (task id).
    pub row_id: Uuid,
    /// Row height in pixels.
    pub height: f64,
    /// Hidden rows keep their slot but occupy no vertical space.
    pub visible: bool,
    /// Expansion state of a hierarchical row.
    pub expanded: bool,
}

/// Computed vertical metrics for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    /// Position in the flattened row order.
    pub index: usize,
    /// Row height in pixels (0 when not visible).
    pub height: f64,
    /// Distance from the top of the row area, in pixels.
    pub top: f64,
    pub visible: bool,
    pub expanded: bool,
    pub row_id: Uuid,
}

/// Subscription handle returned by [`RowTracker::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type RowListener = Box<dyn FnMut(&[RowMetrics])>;

/// Owner of the row metrics table.
pub struct RowTracker {
    rows: Vec<RowMetrics>,
    listeners: Vec<(SubscriptionId, RowListener)>,
    next_subscription: u64,
    generation: u64,
}

impl Default for RowTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RowTracker {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
            generation: 0,
        }
    }

    /// Replace the row set and recompute all metrics from index 0.
    /// Emits one notification for the whole operation.
    pub fn rebuild(&mut self, specs: &[RowSpec]) {
        self.rows = compute_metrics(specs);
        self.generation += 1;
        self.notify();
    }

    /// Merge one row's spec and recompute the full table.
    /// Out-of-range indices are ignored (the caller's row set has moved on;
    /// the next rebuild supersedes the update anyway).
    #[allow(dead_code)]
    pub fn update_row(&mut self, index: usize, spec: RowSpec) {
        if index >= self.rows.len() {
            return;
        }
        let mut specs: Vec<RowSpec> = self
            .rows
            .iter()
            .map(|r| RowSpec {
                row_id: r.row_id,
                height: r.height,
                visible: r.visible,
                expanded: r.expanded,
            })
            .collect();
        specs[index] = spec;
        self.rebuild(&specs);
    }

    /// Metrics for one row, if it exists.
    pub fn row(&self, index: usize) -> Option<&RowMetrics> {
        self.rows.get(index)
    }

    /// Current full table, most recent snapshot.
    pub fn rows(&self) -> &[RowMetrics] {
        &self.rows
    }

    /// Total height of all visible rows.
    #[allow(dead_code)]
    pub fn total_height(&self) -> f64 {
        self.rows
            .iter()
            .filter(|r| r.visible)
            .map(|r| r.height)
            .sum()
    }

    /// Monotonic counter bumped on every rebuild. Lets signal-based hosts
    /// detect staleness without diffing the table.
    #[allow(dead_code)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Register a change listener. Notifications are fire-and-forget and
    /// carry the full current table; consumers should use the most recent
    /// snapshot only.
    #[allow(dead_code)]
    pub fn subscribe(&mut self, listener: impl FnMut(&[RowMetrics]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Safe to call with an already-removed id.
    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.rows);
        }
    }
}

/// Pure metrics computation: tops accumulate over visible rows only.
fn compute_metrics(specs: &[RowSpec]) -> Vec<RowMetrics> {
    let mut rows = Vec::with_capacity(specs.len());
    let mut top = 0.0;
    for (index, spec) in specs.iter().enumerate() {
        let height = if spec.visible { spec.height } else { 0.0 };
        rows.push(RowMetrics {
            index,
            height,
            top,
            visible: spec.visible,
            expanded: spec.expanded,
            row_id: spec.row_id,
        });
        top += height;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn spec(height: f64) -> RowSpec {
        RowSpec {
            row_id: Uuid::new_v4(),
            height,
            visible: true,
            expanded: false,
        }
    }

    #[test]
    fn test_tops_accumulate_from_zero() {
        let mut tracker = RowTracker::new();
        tracker.rebuild(&[spec(32.0), spec(32.0), spec(32.0)]);
        assert_eq!(tracker.row(0).unwrap().top, 0.0);
        assert_eq!(tracker.row(1).unwrap().top, 32.0);
        assert_eq!(tracker.row(2).unwrap().top, 64.0);
        assert_eq!(tracker.total_height(), 96.0);
        assert!(tracker.row(3).is_none());
    }

    #[test]
    fn test_hidden_rows_take_no_space() {
        let mut tracker = RowTracker::new();
        let mut hidden = spec(32.0);
        hidden.visible = false;
        tracker.rebuild(&[spec(32.0), hidden, spec(32.0)]);
        assert_eq!(tracker.row(1).unwrap().height, 0.0);
        assert_eq!(tracker.row(2).unwrap().top, 32.0);
        assert_eq!(tracker.total_height(), 64.0);
    }

    #[test]
    fn test_expand_shifts_rows_below_with_one_notification() {
        // Three 32px rows; expanding row 1 inserts two 32px children, which
        // must move row 2 from top 64 to top 128 in a single notification.
        let mut tracker = RowTracker::new();
        let rows: Vec<RowSpec> = (0..3).map(|_| spec(32.0)).collect();
        tracker.rebuild(&rows);

        let notifications = Rc::new(RefCell::new(0usize));
        let observed = Rc::new(RefCell::new(Vec::new()));
        let n = Rc::clone(&notifications);
        let o = Rc::clone(&observed);
        tracker.subscribe(move |table| {
            *n.borrow_mut() += 1;
            *o.borrow_mut() = table.to_vec();
        });

        let mut expanded_parent = rows[1];
        expanded_parent.expanded = true;
        let with_children = vec![rows[0], expanded_parent, spec(32.0), spec(32.0), rows[2]];
        tracker.rebuild(&with_children);

        assert_eq!(*notifications.borrow(), 1);
        let table = observed.borrow();
        assert_eq!(table.len(), 5);
        // rows[2] now sits at index 4, shifted down by the two children.
        assert_eq!(table[4].row_id, rows[2].row_id);
        assert_eq!(table[4].top, 128.0);
    }

    #[test]
    fn test_update_row_rebuilds_everything_below() {
        let mut tracker = RowTracker::new();
        let rows = [spec(32.0), spec(32.0), spec(32.0)];
        tracker.rebuild(&rows);

        let mut taller = rows[0];
        taller.height = 48.0;
        tracker.update_row(0, taller);
        assert_eq!(tracker.row(1).unwrap().top, 48.0);
        assert_eq!(tracker.row(2).unwrap().top, 80.0);

        // Out-of-range update is ignored.
        let generation = tracker.generation();
        tracker.update_row(10, spec(32.0));
        assert_eq!(tracker.generation(), generation);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut tracker = RowTracker::new();
        let count = Rc::new(RefCell::new(0usize));
        let c = Rc::clone(&count);
        let id = tracker.subscribe(move |_| *c.borrow_mut() += 1);

        tracker.rebuild(&[spec(32.0)]);
        assert_eq!(*count.borrow(), 1);

        tracker.unsubscribe(id);
        tracker.rebuild(&[spec(32.0), spec(32.0)]);
        assert_eq!(*count.borrow(), 1);
    }
}
