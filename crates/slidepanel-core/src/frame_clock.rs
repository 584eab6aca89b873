use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Identifier of a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameCallbackId(u64);

type FrameCallback = Box<dyn FnOnce(u64)>;

#[derive(Default)]
struct FrameClockInner {
    next_id: u64,
    pending: SmallVec<[(FrameCallbackId, FrameCallback); 4]>,
    last_frame_nanos: Option<u64>,
}

/// One-shot frame callback registry.
///
/// Callbacks registered with [`FrameClock::with_frame_nanos`] run on the next
/// call to [`FrameClock::drain_frame_callbacks`]. A callback that registers
/// another callback while being drained is deferred to the following frame.
#[derive(Clone, Default)]
pub struct FrameClock {
    inner: Rc<RefCell<FrameClockInner>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = FrameCallbackId(inner.next_id);
            inner.next_id += 1;
            inner.pending.push((id, Box::new(callback)));
            id
        };
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Returns true while at least one callback waits for the next frame.
    pub fn has_pending_callbacks(&self) -> bool {
        !self.inner.borrow().pending.is_empty()
    }

    /// Timestamp of the most recently drained frame.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.inner.borrow().last_frame_nanos
    }

    /// Runs every callback that was pending when the call started.
    ///
    /// Returns the number of callbacks invoked.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        let (time, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            let time = match inner.last_frame_nanos {
                Some(last) if frame_time_nanos < last => {
                    log::warn!("frame time went backwards ({frame_time_nanos} < {last}), clamping");
                    last
                }
                _ => frame_time_nanos,
            };
            inner.last_frame_nanos = Some(time);
            (time, std::mem::take(&mut inner.pending))
        };

        let count = callbacks.len();
        for (_, callback) in callbacks {
            callback(time);
        }
        count
    }
}

/// Handle to a pending frame callback. Dropping it cancels the callback.
pub struct FrameCallbackRegistration {
    clock: Weak<RefCell<FrameClockInner>>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(clock) = self.clock.upgrade() {
            clock
                .borrow_mut()
                .pending
                .retain(|(pending, _)| *pending != id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
