use std::cell::Cell;
use std::rc::Rc;

/// Something that can be asked to schedule a redraw.
///
/// Requests are fire-and-forget; implementations coalesce them until the host
/// draws the next frame.
pub trait RedrawRequester {
    fn request_redraw(&self);
}

/// Coalescing redraw flag shared between state owners and the host loop.
#[derive(Clone, Default)]
pub struct RedrawSignal {
    pending: Rc<Cell<bool>>,
    requests: Rc<Cell<u64>>,
}

impl RedrawSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Clears the flag and reports whether a redraw was requested.
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }

    /// Total requests received, including coalesced ones.
    pub fn request_count(&self) -> u64 {
        self.requests.get()
    }
}

impl RedrawRequester for RedrawSignal {
    fn request_redraw(&self) {
        self.pending.set(true);
        self.requests.set(self.requests.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_coalesce_until_taken() {
        let signal = RedrawSignal::new();
        assert!(!signal.is_pending());

        signal.request_redraw();
        signal.request_redraw();
        assert!(signal.is_pending());
        assert_eq!(signal.request_count(), 2);

        assert!(signal.take());
        assert!(!signal.take());
        assert_eq!(signal.request_count(), 2);
    }

    #[test]
    fn clones_share_the_flag() {
        let signal = RedrawSignal::new();
        let clone = signal.clone();
        clone.request_redraw();
        assert!(signal.take());
    }
}
