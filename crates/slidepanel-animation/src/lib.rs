//! Animation support for slidepanel
//!
//! A [`ProgressSource`] exposes a value in [0, 1] together with a status that
//! separates where the value rests from which way it is travelling.
//! [`ProgressAnimator`] is the frame-clock driven implementation, flinging the
//! value with a spring simulation.

mod animator;
mod progress;
mod spring;
mod status;

pub use animator::ProgressAnimator;
pub use progress::{ListenerId, ProgressSource, StatusListener, ValueListener};
pub use spring::{SpringSimulation, SpringSpec};
pub use status::{AnimationStatus, RestState, Trajectory};

pub mod prelude {
    pub use crate::animator::ProgressAnimator;
    pub use crate::progress::ProgressSource;
    pub use crate::status::{AnimationStatus, RestState, Trajectory};
}
