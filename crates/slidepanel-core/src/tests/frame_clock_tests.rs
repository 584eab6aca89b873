use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn callbacks_run_once_on_next_drain() {
    let clock = FrameClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let seen = Rc::clone(&seen);
        clock.with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };
    assert!(clock.has_pending_callbacks());

    assert_eq!(clock.drain_frame_callbacks(16_000_000), 1);
    assert_eq!(clock.drain_frame_callbacks(32_000_000), 0);
    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    drop(registration);
}

#[test]
fn dropping_registration_cancels_callback() {
    let clock = FrameClock::new();
    let fired = Rc::new(RefCell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        clock.with_frame_nanos(move |_| *fired.borrow_mut() = true)
    };
    drop(registration);

    assert!(!clock.has_pending_callbacks());
    clock.drain_frame_callbacks(1);
    assert!(!*fired.borrow());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let clock = FrameClock::new();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let nested: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    let _outer = {
        let clock_handle = clock.clone();
        let frames = Rc::clone(&frames);
        let nested = Rc::clone(&nested);
        clock.with_frame_nanos(move |time| {
            frames.borrow_mut().push(("outer", time));
            let frames = Rc::clone(&frames);
            let registration =
                clock_handle.with_frame_nanos(move |time| frames.borrow_mut().push(("inner", time)));
            nested.borrow_mut().replace(registration);
        })
    };

    clock.drain_frame_callbacks(10);
    assert_eq!(frames.borrow().as_slice(), &[("outer", 10)]);
    assert!(clock.has_pending_callbacks());

    clock.drain_frame_callbacks(20);
    assert_eq!(frames.borrow().as_slice(), &[("outer", 10), ("inner", 20)]);
}

#[test]
fn frame_time_never_goes_backwards() {
    let clock = FrameClock::new();
    clock.drain_frame_callbacks(100);

    let seen = Rc::new(RefCell::new(None));
    let _registration = {
        let seen = Rc::clone(&seen);
        clock.with_frame_nanos(move |nanos| *seen.borrow_mut() = Some(nanos))
    };
    clock.drain_frame_callbacks(50);

    assert_eq!(clock.last_frame_nanos(), Some(100));
    assert_eq!(*seen.borrow(), Some(100));
}
