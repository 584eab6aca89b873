//! Foundation elements for slidepanel: gestures, focus, navigation history,
//! and layout measurement shared between a panel and its controller.

pub mod focus;
pub mod gesture_constants;
pub mod gestures;
pub mod measurement;
pub mod navigation;

pub use focus::{FocusManager, FocusScope, FocusScopeId, FocusState};
pub use gestures::{
    DragDownDetails, DragEndDetails, DragEvent, DragHandler, DragUpdateDetails, Velocity,
};
pub use measurement::MeasuredWidth;
pub use navigation::{HistoryEntry, HistoryEntryHandle, LocalHistory, NavigationHistory};

pub mod prelude {
    pub use crate::focus::{FocusScope, FocusScopeId};
    pub use crate::gestures::{DragEvent, DragHandler};
    pub use crate::measurement::MeasuredWidth;
    pub use crate::navigation::{HistoryEntryHandle, NavigationHistory};
}
