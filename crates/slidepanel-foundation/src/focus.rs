//! Focus bookkeeping for panels that claim input focus while shown.
//!
//! This is not a traversal engine: it only tracks which scope currently owns
//! focus so a modal layer can take it when it appears.

use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// Unique identifier for a focus scope.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusScopeId(pub(crate) usize);

impl FocusScopeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn as_usize(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Inactive,
    Active,
}

/// Something that can hand first focus to a scope.
pub trait FocusScope {
    fn request_first_focus(&self, scope: FocusScopeId);
}

struct FocusManagerState {
    active_scope: Option<FocusScopeId>,
    scope_states: FxHashMap<FocusScopeId, FocusState>,
    next_id: usize,
}

/// Tracks which scope owns focus.
///
/// Uses interior mutability so it can be shared behind `Rc<dyn FocusScope>`.
pub struct FocusManager {
    state: RefCell<FocusManagerState>,
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusManager {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FocusManagerState {
                active_scope: None,
                scope_states: FxHashMap::default(),
                next_id: 1,
            }),
        }
    }

    /// Allocates a new unique scope ID.
    pub fn allocate_scope_id(&self) -> FocusScopeId {
        let mut state = self.state.borrow_mut();
        let id = FocusScopeId(state.next_id);
        state.next_id += 1;
        id
    }

    pub fn active_scope(&self) -> Option<FocusScopeId> {
        self.state.borrow().active_scope
    }

    pub fn focus_state(&self, scope: FocusScopeId) -> FocusState {
        self.state
            .borrow()
            .scope_states
            .get(&scope)
            .copied()
            .unwrap_or_default()
    }

    pub fn is_focused(&self, scope: FocusScopeId) -> bool {
        self.state.borrow().active_scope == Some(scope)
    }

    /// Drops focus from `scope` if it holds it, e.g. when it unmounts.
    pub fn release(&self, scope: FocusScopeId) {
        let mut state = self.state.borrow_mut();
        state.scope_states.remove(&scope);
        if state.active_scope == Some(scope) {
            state.active_scope = None;
        }
    }
}

impl FocusScope for FocusManager {
    fn request_first_focus(&self, scope: FocusScopeId) {
        let mut state = self.state.borrow_mut();
        if let Some(previous) = state.active_scope {
            if previous != scope {
                state.scope_states.insert(previous, FocusState::Inactive);
            }
        }
        state.active_scope = Some(scope);
        state.scope_states.insert(scope, FocusState::Active);
        log::trace!("first focus -> scope {}", scope.0);
    }
}
