//! Back-navigation history entries.
//!
//! A component that behaves like a modal layer pushes a [`HistoryEntry`] so
//! that a system back action dismisses it before leaving the route. Entries
//! removed by the system run their removal callback; entries removed by their
//! owner through [`NavigationHistory::remove`] do not, because the owner
//! already knows.

use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Token for a pushed history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HistoryEntryHandle(u64);

impl HistoryEntryHandle {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// An entry waiting to be pushed, carrying its external-removal callback.
#[derive(Default)]
pub struct HistoryEntry {
    on_removed: Option<Box<dyn FnOnce()>>,
}

impl HistoryEntry {
    pub fn new(on_removed: impl FnOnce() + 'static) -> Self {
        Self {
            on_removed: Some(Box::new(on_removed)),
        }
    }

    fn notify_removed(self) {
        if let Some(callback) = self.on_removed {
            callback();
        }
    }
}

impl fmt::Debug for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEntry")
            .field("has_on_removed", &self.on_removed.is_some())
            .finish()
    }
}

/// Back-navigation stack as seen by a component living inside a route.
pub trait NavigationHistory {
    fn push(&self, entry: HistoryEntry) -> HistoryEntryHandle;

    /// Owner-initiated removal. Does not invoke the entry's callback.
    /// Returns false when the entry is already gone.
    fn remove(&self, handle: HistoryEntryHandle) -> bool;
}

#[derive(Default)]
struct LocalHistoryInner {
    entries: IndexMap<HistoryEntryHandle, HistoryEntry>,
    next_id: u64,
}

/// Route-local history stack.
///
/// Cloning yields another handle to the same stack.
#[derive(Clone, Default)]
pub struct LocalHistory {
    inner: Rc<RefCell<LocalHistoryInner>>,
}

impl LocalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    pub fn contains(&self, handle: HistoryEntryHandle) -> bool {
        self.inner.borrow().entries.contains_key(&handle)
    }

    /// Handles a back action: removes the newest entry and runs its removal
    /// callback. Returns false when there was nothing to pop, meaning the
    /// back action belongs to the enclosing route.
    pub fn pop(&self) -> bool {
        let popped = self.inner.borrow_mut().entries.pop();
        match popped {
            Some((handle, entry)) => {
                log::debug!("history entry {} popped by back action", handle.0);
                entry.notify_removed();
                true
            }
            None => false,
        }
    }

    /// Removes every entry as if the route were torn down, newest first.
    pub fn clear(&self) {
        while self.pop() {}
    }
}

impl NavigationHistory for LocalHistory {
    fn push(&self, entry: HistoryEntry) -> HistoryEntryHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = HistoryEntryHandle(inner.next_id);
        inner.next_id += 1;
        inner.entries.insert(handle, entry);
        log::debug!("history entry {} pushed", handle.0);
        handle
    }

    fn remove(&self, handle: HistoryEntryHandle) -> bool {
        let removed = self.inner.borrow_mut().entries.shift_remove(&handle);
        if removed.is_some() {
            log::debug!("history entry {} removed by owner", handle.0);
        }
        removed.is_some()
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
