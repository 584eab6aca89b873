//! Material drawer for slidepanel
//!
//! [`Drawer`] is the static panel shell. [`DrawerController`] turns drag
//! gestures and programmatic requests into progress animation, keeps a
//! back-navigation entry alive while the panel is open, and tells its owner
//! when the panel logically opens or closes.

mod config;
mod constants;
mod controller;
mod drawer;
mod error;
mod visuals;

pub use config::DrawerConfig;
pub use constants::*;
pub use controller::{DrawerController, DrawerControllerBuilder, DrawerPhase, OpenChangedCallback};
pub use drawer::{Drawer, DrawerSide};
pub use error::DrawerError;
pub use visuals::{AcceptedGestures, DrawerLayer, DrawerVisuals};

pub mod prelude {
    pub use crate::controller::{DrawerController, DrawerPhase};
    pub use crate::drawer::{Drawer, DrawerSide};
    pub use crate::visuals::{DrawerLayer, DrawerVisuals};
    pub use crate::DrawerConfig;
}
