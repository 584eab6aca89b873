use std::cell::RefCell;
use std::rc::Rc;

use slidepanel_core::{FrameCallbackRegistration, FrameClock};
use smallvec::SmallVec;

use crate::progress::{ListenerId, ProgressSource, StatusListener, ValueListener};
use crate::spring::{SpringSimulation, SpringSpec};
use crate::status::{AnimationStatus, Trajectory};

/// Flings overshoot the bounds by this much so the spring actually reaches
/// them before its thresholds declare it done.
const BOUNDS_TOLERANCE: f32 = 0.001;

/// Frame-clock driven [`ProgressSource`].
///
/// Flings run a [`SpringSimulation`] sampled once per frame. Cloning yields
/// another handle to the same animator.
#[derive(Clone)]
pub struct ProgressAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

struct RunningFling {
    simulation: SpringSimulation,
    start_time_nanos: Option<u64>,
}

struct AnimatorInner {
    clock: FrameClock,
    spring: SpringSpec,
    value: f32,
    direction: Trajectory,
    status: AnimationStatus,
    last_reported_status: AnimationStatus,
    fling: Option<RunningFling>,
    registration: Option<FrameCallbackRegistration>,
    value_listeners: SmallVec<[(ListenerId, Rc<dyn Fn(f32)>); 2]>,
    status_listeners: SmallVec<[(ListenerId, Rc<dyn Fn(AnimationStatus)>); 2]>,
    next_listener_id: u64,
    disposed: bool,
}

impl ProgressAnimator {
    /// Creates an animator resting at 0.
    pub fn new(clock: FrameClock) -> Self {
        Self::with_value(clock, 0.0)
    }

    pub fn with_value(clock: FrameClock, value: f32) -> Self {
        let value = value.clamp(0.0, 1.0);
        let status = AnimationStatus::for_value(value, Trajectory::Forward);
        let inner = AnimatorInner {
            clock,
            spring: SpringSpec::fling(),
            value,
            direction: Trajectory::Forward,
            status,
            last_reported_status: status,
            fling: None,
            registration: None,
            value_listeners: SmallVec::new(),
            status_listeners: SmallVec::new(),
            next_listener_id: 1,
            disposed: false,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn with_spring(self, spring: SpringSpec) -> Self {
        self.inner.borrow_mut().spring = spring;
        self
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    /// Number of listeners still attached, across both kinds.
    pub fn listener_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.value_listeners.len() + inner.status_listeners.len()
    }

    fn schedule_frame(&self) {
        let clock = {
            let inner = self.inner.borrow();
            if inner.registration.is_some() || inner.fling.is_none() || inner.disposed {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(&self.inner);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(inner) = weak.upgrade() {
                ProgressAnimator { inner }.on_frame(time);
            }
        });
        self.inner.borrow_mut().registration = Some(registration);
    }

    fn on_frame(&self, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = self.inner.borrow_mut();
            inner.registration = None;
            if inner.disposed {
                return;
            }
            let direction = inner.direction;
            let Some(fling) = inner.fling.as_mut() else {
                return;
            };

            let start = *fling.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start) as f32 / 1_000_000_000.0;
            let simulation = fling.simulation;

            if simulation.is_done(elapsed) {
                inner.fling = None;
                inner.value = match direction {
                    Trajectory::Forward => 1.0,
                    Trajectory::Reverse => 0.0,
                };
                inner.status = AnimationStatus::Resting(direction.destination());
                log::trace!("fling finished at {} after {elapsed:.3}s", inner.value);
                false
            } else {
                inner.value = simulation.x(elapsed).clamp(0.0, 1.0);
                true
            }
        };

        self.notify_value_listeners();
        self.notify_status_if_changed();

        if schedule_next {
            self.schedule_frame();
        }
    }

    fn cancel_fling(inner: &mut AnimatorInner) {
        inner.fling = None;
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
    }

    fn add_listener_id(inner: &mut AnimatorInner) -> ListenerId {
        let id = ListenerId(inner.next_listener_id);
        inner.next_listener_id += 1;
        id
    }

    fn notify_value_listeners(&self) {
        let (value, listeners) = {
            let inner = self.inner.borrow();
            if inner.disposed {
                return;
            }
            let listeners: SmallVec<[(ListenerId, Rc<dyn Fn(f32)>); 2]> = inner
                .value_listeners
                .iter()
                .map(|(id, listener)| (*id, Rc::clone(listener)))
                .collect();
            (inner.value, listeners)
        };
        for (id, listener) in listeners {
            // An earlier listener may have removed this one or disposed us.
            let attached = {
                let inner = self.inner.borrow();
                !inner.disposed && inner.value_listeners.iter().any(|(l, _)| *l == id)
            };
            if attached {
                listener(value);
            }
        }
    }

    fn notify_status_if_changed(&self) {
        let (status, listeners) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.status == inner.last_reported_status {
                return;
            }
            inner.last_reported_status = inner.status;
            let listeners: SmallVec<[(ListenerId, Rc<dyn Fn(AnimationStatus)>); 2]> = inner
                .status_listeners
                .iter()
                .map(|(id, listener)| (*id, Rc::clone(listener)))
                .collect();
            (inner.status, listeners)
        };
        log::trace!("progress status -> {status:?}");
        for (id, listener) in listeners {
            let attached = {
                let inner = self.inner.borrow();
                !inner.disposed && inner.status_listeners.iter().any(|(l, _)| *l == id)
            };
            if attached {
                listener(status);
            }
        }
    }
}

impl ProgressSource for ProgressAnimator {
    fn value(&self) -> f32 {
        self.inner.borrow().value
    }

    fn status(&self) -> AnimationStatus {
        self.inner.borrow().status
    }

    fn is_animating(&self) -> bool {
        self.inner.borrow().fling.is_some()
    }

    fn stop(&self) {
        Self::cancel_fling(&mut self.inner.borrow_mut());
    }

    fn set_value(&self, value: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            Self::cancel_fling(&mut inner);
            inner.value = value.clamp(0.0, 1.0);
            inner.status = AnimationStatus::for_value(inner.value, inner.direction);
        }
        self.notify_value_listeners();
        self.notify_status_if_changed();
    }

    fn fling(&self, velocity: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            Self::cancel_fling(&mut inner);
            let (direction, target) = if velocity < 0.0 {
                (Trajectory::Reverse, -BOUNDS_TOLERANCE)
            } else {
                (Trajectory::Forward, 1.0 + BOUNDS_TOLERANCE)
            };
            log::debug!(
                "fling from {:.3} towards {direction:?} at {velocity:.3}/s",
                inner.value
            );
            inner.direction = direction;
            inner.fling = Some(RunningFling {
                simulation: SpringSimulation::new(inner.spring, inner.value, target, velocity),
                start_time_nanos: None,
            });
            inner.status = AnimationStatus::Moving(direction);
        }
        self.notify_status_if_changed();
        self.schedule_frame();
    }

    fn add_value_listener(&self, listener: ValueListener) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = Self::add_listener_id(&mut inner);
        if !inner.disposed {
            inner.value_listeners.push((id, Rc::from(listener)));
        }
        id
    }

    fn add_status_listener(&self, listener: StatusListener) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = Self::add_listener_id(&mut inner);
        if !inner.disposed {
            inner.status_listeners.push((id, Rc::from(listener)));
        }
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        let mut inner = self.inner.borrow_mut();
        inner.value_listeners.retain(|(listener, _)| *listener != id);
        inner.status_listeners.retain(|(listener, _)| *listener != id);
    }

    fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        Self::cancel_fling(&mut inner);
        inner.value_listeners.clear();
        inner.status_listeners.clear();
        inner.disposed = true;
        log::debug!("progress animator disposed at {:.3}", inner.value);
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
