use super::*;

use std::cell::Cell;
use std::rc::Rc;

#[test]
fn pop_removes_newest_entry_and_runs_its_callback() {
    let history = LocalHistory::new();
    let first_removed = Rc::new(Cell::new(false));
    let second_removed = Rc::new(Cell::new(false));

    let first = {
        let flag = Rc::clone(&first_removed);
        history.push(HistoryEntry::new(move || flag.set(true)))
    };
    let second = {
        let flag = Rc::clone(&second_removed);
        history.push(HistoryEntry::new(move || flag.set(true)))
    };
    assert_eq!(history.len(), 2);

    assert!(history.pop());
    assert!(second_removed.get());
    assert!(!first_removed.get());
    assert!(!history.contains(second));
    assert!(history.contains(first));
}

#[test]
fn owner_removal_is_silent_and_idempotent() {
    let history = LocalHistory::new();
    let removed = Rc::new(Cell::new(false));
    let handle = {
        let flag = Rc::clone(&removed);
        history.push(HistoryEntry::new(move || flag.set(true)))
    };

    assert!(history.remove(handle));
    assert!(!history.remove(handle));
    assert!(!removed.get());
    assert!(history.is_empty());
}

#[test]
fn pop_on_empty_history_is_declined() {
    let history = LocalHistory::new();
    assert!(!history.pop());
}

#[test]
fn removal_callback_may_touch_the_history() {
    let history = LocalHistory::new();
    let pushed_again = Rc::new(Cell::new(None));
    {
        let history_handle = history.clone();
        let pushed_again = Rc::clone(&pushed_again);
        history.push(HistoryEntry::new(move || {
            pushed_again.set(Some(history_handle.push(HistoryEntry::default())));
        }));
    }

    assert!(history.pop());
    let replacement = pushed_again.get().expect("callback pushed a new entry");
    assert!(history.contains(replacement));
    assert_eq!(history.len(), 1);
}

#[test]
fn clear_pops_everything() {
    let history = LocalHistory::new();
    let removals = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let removals = Rc::clone(&removals);
        history.push(HistoryEntry::new(move || removals.set(removals.get() + 1)));
    }
    history.clear();
    assert!(history.is_empty());
    assert_eq!(removals.get(), 3);
}
