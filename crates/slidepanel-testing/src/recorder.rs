//! Recording fakes for a drawer's collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use slidepanel_foundation::{HistoryEntry, HistoryEntryHandle, LocalHistory, NavigationHistory};

/// Collects every open/closed report a drawer makes to its owner.
#[derive(Clone, Default)]
pub struct OpenStateRecorder {
    reports: Rc<RefCell<Vec<bool>>>,
}

impl OpenStateRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback to hand to `DrawerControllerBuilder::on_open_changed`.
    pub fn callback(&self) -> impl Fn(bool) + 'static {
        let reports = Rc::clone(&self.reports);
        move |open| reports.borrow_mut().push(open)
    }

    pub fn reports(&self) -> Vec<bool> {
        self.reports.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn last(&self) -> Option<bool> {
        self.reports.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

/// A history operation observed by [`RecordingHistory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryOp {
    Push(HistoryEntryHandle),
    /// Owner removal and whether the entry was still present.
    Remove(HistoryEntryHandle, bool),
    /// Back action and whether it popped an entry.
    Back(bool),
}

/// [`LocalHistory`] that also logs what was done to it.
#[derive(Clone, Default)]
pub struct RecordingHistory {
    history: LocalHistory,
    ops: Rc<RefCell<Vec<HistoryOp>>>,
}

impl RecordingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<HistoryOp> {
        self.ops.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Simulates the system back action.
    pub fn back(&self) -> bool {
        let popped = self.history.pop();
        self.ops.borrow_mut().push(HistoryOp::Back(popped));
        popped
    }
}

impl NavigationHistory for RecordingHistory {
    fn push(&self, entry: HistoryEntry) -> HistoryEntryHandle {
        let handle = self.history.push(entry);
        self.ops.borrow_mut().push(HistoryOp::Push(handle));
        handle
    }

    fn remove(&self, handle: HistoryEntryHandle) -> bool {
        let removed = self.history.remove(handle);
        self.ops.borrow_mut().push(HistoryOp::Remove(handle, removed));
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn recorder_collects_reports_in_order() {
        let recorder = OpenStateRecorder::new();
        let callback = recorder.callback();
        callback(true);
        callback(false);
        assert_eq!(recorder.reports(), vec![true, false]);
        assert_eq!(recorder.last(), Some(false));
        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn recording_history_logs_operations() {
        let history = RecordingHistory::new();
        let removed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&removed);
        let first = history.push(HistoryEntry::new(move || flag.set(true)));
        let second = history.push(HistoryEntry::default());

        assert!(history.remove(second));
        assert!(!history.remove(second));
        assert!(history.back());
        assert!(!history.back());

        assert!(removed.get());
        assert_eq!(
            history.ops(),
            vec![
                HistoryOp::Push(first),
                HistoryOp::Push(second),
                HistoryOp::Remove(second, true),
                HistoryOp::Remove(second, false),
                HistoryOp::Back(true),
                HistoryOp::Back(false),
            ]
        );
    }
}
