//! Core runtime pieces shared by every slidepanel crate.
//!
//! The host owns a [`FrameClock`] and drains it once per frame; animations
//! register one-shot callbacks on it. State changes never redraw inline:
//! they go through a [`RedrawRequester`] and the host decides when to draw.

mod frame_clock;
mod redraw;

pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use redraw::{RedrawRequester, RedrawSignal};

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::redraw::{RedrawRequester, RedrawSignal};
}
