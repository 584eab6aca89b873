use crate::status::AnimationStatus;

/// Identifier returned when subscribing to a [`ProgressSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

pub type ValueListener = Box<dyn Fn(f32)>;
pub type StatusListener = Box<dyn Fn(AnimationStatus)>;

/// A normalized value in [0, 1] that can be stopped, set, and flung.
///
/// All methods take `&self`; implementations use interior mutability and must
/// not hold internal borrows while invoking listeners, since listeners are
/// allowed to call back into the source.
pub trait ProgressSource {
    fn value(&self) -> f32;

    fn status(&self) -> AnimationStatus;

    /// True while a fling is in flight.
    fn is_animating(&self) -> bool;

    /// Stops any running animation, leaving value and status untouched.
    fn stop(&self);

    /// Stops any animation and jumps to `value`, clamped to [0, 1].
    fn set_value(&self, value: f32);

    /// Animates towards 1 for positive and towards 0 for negative `velocity`,
    /// expressed in units per second.
    fn fling(&self, velocity: f32);

    /// Called after every value change.
    fn add_value_listener(&self, listener: ValueListener) -> ListenerId;

    /// Called whenever the reported status changes.
    fn add_status_listener(&self, listener: StatusListener) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);

    /// Stops animating and drops every listener. Idempotent.
    fn dispose(&self);
}
