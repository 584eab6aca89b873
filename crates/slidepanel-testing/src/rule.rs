//! Headless test rule for a drawer controller.
//!
//! [`DrawerTestRule`] wires a [`DrawerController`] to real collaborators (a
//! frame clock with a spring animator, a recording history, a focus manager,
//! a measured width and a redraw signal) and lets a test drive it with drag
//! gestures and synthetic frames.
//!
//! # Example
//!
//! ```
//! use slidepanel_material::DrawerSide;
//! use slidepanel_testing::DrawerTestRule;
//!
//! let mut rule = DrawerTestRule::new(DrawerSide::Start);
//! rule.set_panel_width(300.0);
//! rule.drag(&[120.0, 80.0], 10.0);
//! rule.pump_until_idle();
//! assert_eq!(rule.progress(), 1.0);
//! ```

use std::rc::Rc;

use slidepanel_animation::{AnimationStatus, ProgressAnimator, ProgressSource};
use slidepanel_core::{FrameClock, RedrawSignal};
use slidepanel_foundation::{
    DragDownDetails, DragEndDetails, DragHandler, DragUpdateDetails, FocusManager, FocusScopeId,
    MeasuredWidth,
};
use slidepanel_material::{Drawer, DrawerConfig, DrawerController, DrawerSide, DrawerVisuals};
use slidepanel_ui_graphics::EdgeInsets;

use crate::recorder::{OpenStateRecorder, RecordingHistory};

/// Duration of one synthetic frame (60 Hz).
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`DrawerTestRule::pump_until_idle`].
const MAX_IDLE_FRAMES: usize = 600;

pub struct DrawerTestRule {
    clock: FrameClock,
    animator: ProgressAnimator,
    history: RecordingHistory,
    focus: Rc<FocusManager>,
    scope: FocusScopeId,
    measured: MeasuredWidth,
    redraw: RedrawSignal,
    recorder: OpenStateRecorder,
    controller: DrawerController<()>,
    frame_time_nanos: u64,
}

impl DrawerTestRule {
    pub fn new(side: DrawerSide) -> Self {
        Self::with_config(side, DrawerConfig::default())
    }

    /// # Panics
    ///
    /// Panics if `config` is rejected by the controller builder.
    pub fn with_config(side: DrawerSide, config: DrawerConfig) -> Self {
        let clock = FrameClock::new();
        let animator = ProgressAnimator::new(clock.clone()).with_spring(config.spring);
        let history = RecordingHistory::new();
        let focus = Rc::new(FocusManager::new());
        let scope = focus.allocate_scope_id();
        let measured = MeasuredWidth::new();
        let redraw = RedrawSignal::new();
        let recorder = OpenStateRecorder::new();

        let controller = DrawerController::builder()
            .side(side)
            .child(Drawer::new(()))
            .config(config)
            .on_open_changed(recorder.callback())
            .progress_source(Rc::new(animator.clone()))
            .history(Rc::new(history.clone()))
            .focus(focus.clone(), scope)
            .measured_width(measured.clone())
            .redraw(Rc::new(redraw.clone()))
            .build()
            .unwrap_or_else(|err| panic!("test rule could not build controller: {err}"));

        Self {
            clock,
            animator,
            history,
            focus,
            scope,
            measured,
            redraw,
            recorder,
            controller,
            frame_time_nanos: 0,
        }
    }

    pub fn controller(&self) -> &DrawerController<()> {
        &self.controller
    }

    pub fn animator(&self) -> &ProgressAnimator {
        &self.animator
    }

    pub fn history(&self) -> &RecordingHistory {
        &self.history
    }

    pub fn focus(&self) -> &FocusManager {
        &self.focus
    }

    pub fn focus_scope(&self) -> FocusScopeId {
        self.scope
    }

    pub fn redraw(&self) -> &RedrawSignal {
        &self.redraw
    }

    pub fn recorder(&self) -> &OpenStateRecorder {
        &self.recorder
    }

    /// Owner reports so far.
    pub fn reports(&self) -> Vec<bool> {
        self.recorder.reports()
    }

    pub fn progress(&self) -> f32 {
        self.animator.value()
    }

    pub fn status(&self) -> AnimationStatus {
        self.animator.status()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Simulates the panel's layout measuring it at `width`.
    pub fn set_panel_width(&self, width: f32) {
        self.measured.record_width(width);
    }

    pub fn visuals(&self) -> DrawerVisuals {
        self.controller.visuals(EdgeInsets::ZERO)
    }

    pub fn drag_down(&self) {
        self.controller.on_drag_down(DragDownDetails::default());
    }

    pub fn drag_by(&self, delta: f32) {
        self.controller
            .on_drag_update(DragUpdateDetails::horizontal(delta));
    }

    pub fn release(&self, velocity: f32) {
        self.controller
            .on_drag_end(DragEndDetails::horizontal(velocity));
    }

    pub fn cancel(&self) {
        self.controller.on_drag_cancel();
    }

    /// Full gesture: down, one update per delta, release at `velocity` px/s.
    pub fn drag(&self, deltas: &[f32], velocity: f32) {
        self.drag_down();
        for delta in deltas {
            self.drag_by(*delta);
        }
        self.release(velocity);
    }

    /// Simulates the system back action.
    pub fn back(&self) -> bool {
        self.history.back()
    }

    /// Advances time by one frame and runs pending frame callbacks.
    ///
    /// Returns the number of callbacks run.
    pub fn pump_frame(&mut self) -> usize {
        self.frame_time_nanos += FRAME_NANOS;
        self.clock.drain_frame_callbacks(self.frame_time_nanos)
    }

    /// Pumps frames until nothing is scheduled. Returns the frame count.
    ///
    /// # Panics
    ///
    /// Panics if the animation is still running after a generous number of
    /// frames.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.clock.has_pending_callbacks() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "drawer still animating after {MAX_IDLE_FRAMES} frames at {}",
                self.progress()
            );
            self.pump_frame();
            frames += 1;
        }
        log::trace!("idle after {frames} frames at {:.3}", self.progress());
        frames
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }
}
