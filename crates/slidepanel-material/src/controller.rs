use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slidepanel_animation::{
    AnimationStatus, ListenerId, ProgressAnimator, ProgressSource, Trajectory,
};
use slidepanel_core::{FrameClock, RedrawRequester};
use slidepanel_foundation::{
    DragDownDetails, DragEndDetails, DragHandler, DragUpdateDetails, FocusScope, FocusScopeId,
    HistoryEntry, HistoryEntryHandle, MeasuredWidth, NavigationHistory,
};
use slidepanel_ui_graphics::EdgeInsets;
use smallvec::SmallVec;

use crate::config::DrawerConfig;
use crate::drawer::{Drawer, DrawerSide};
use crate::error::DrawerError;
use crate::visuals::DrawerVisuals;

/// Receives `true` when the drawer logically opens and `false` when it closes.
pub type OpenChangedCallback = Rc<dyn Fn(bool)>;

/// Coarse interaction state of a drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerPhase {
    Closed,
    Dragging,
    Settling,
    Open,
}

/// Interaction controller for one mounted drawer.
///
/// Cloning yields another handle to the same controller. When the last
/// handle is dropped the controller is torn down as if [`dispose`] had been
/// called.
///
/// [`dispose`]: DrawerController::dispose
pub struct DrawerController<C: 'static> {
    inner: Rc<DrawerInner<C>>,
}

impl<C: 'static> Clone for DrawerController<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct DrawerInner<C: 'static> {
    side: DrawerSide,
    drawer: Drawer<C>,
    config: DrawerConfig,
    source: Rc<dyn ProgressSource>,
    history: Option<Rc<dyn NavigationHistory>>,
    focus: Option<(Rc<dyn FocusScope>, FocusScopeId)>,
    measured_width: MeasuredWidth,
    redraw: Option<Rc<dyn RedrawRequester>>,
    on_open_changed: Option<OpenChangedCallback>,
    state: RefCell<DrawerState>,
}

#[derive(Default)]
struct DrawerState {
    history_entry: Option<HistoryEntryHandle>,
    /// Last state reported to the owner.
    previously_opened: bool,
    /// Side of the threshold the last observed value was on.
    value_open: bool,
    dragging: bool,
    listeners: SmallVec<[ListenerId; 2]>,
    disposed: bool,
}

impl<C: 'static> DrawerController<C> {
    pub fn builder() -> DrawerControllerBuilder<C> {
        DrawerControllerBuilder::new()
    }

    pub fn side(&self) -> DrawerSide {
        self.inner.side
    }

    pub fn drawer(&self) -> &Drawer<C> {
        &self.inner.drawer
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.inner.config
    }

    /// Handle the panel's layout writes its measured size into.
    pub fn measured_width(&self) -> &MeasuredWidth {
        &self.inner.measured_width
    }

    pub fn progress(&self) -> f32 {
        self.inner.source.value()
    }

    pub fn status(&self) -> AnimationStatus {
        self.inner.source.status()
    }

    /// The last open state reported to the owner.
    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().previously_opened
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.state.borrow().dragging
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.state.borrow().disposed
    }

    pub fn history_entry(&self) -> Option<HistoryEntryHandle> {
        self.inner.state.borrow().history_entry
    }

    pub fn phase(&self) -> DrawerPhase {
        if self.is_dragging() {
            return DrawerPhase::Dragging;
        }
        let value = self.inner.source.value();
        if self.inner.source.is_animating() || (value > 0.0 && value < 1.0) {
            DrawerPhase::Settling
        } else if value >= 1.0 {
            DrawerPhase::Open
        } else {
            DrawerPhase::Closed
        }
    }

    /// Width drags are normalized against right now.
    pub fn resolved_width(&self) -> f32 {
        self.inner.resolved_width()
    }

    pub fn visuals(&self, insets: EdgeInsets) -> DrawerVisuals {
        DrawerVisuals::compute(
            self.inner.side,
            self.inner.source.value(),
            self.inner.source.status(),
            insets,
            &self.inner.config,
        )
    }

    /// Starts opening and reports `true` right away.
    pub fn open(&self) {
        self.inner.open();
    }

    /// Starts closing and reports `false` right away, even when already
    /// closed.
    pub fn close(&self) {
        self.inner.close();
    }

    /// Tap on the barrier behind the panel.
    pub fn scrim_tap(&self) {
        self.inner.close();
    }

    /// Tears the controller down. Idempotent.
    pub fn dispose(&self) {
        self.inner.teardown();
    }
}

impl<C: 'static> DragHandler for DrawerController<C> {
    fn on_drag_down(&self, _details: DragDownDetails) {
        if self.inner.rejects_after_teardown("drag down") {
            return;
        }
        self.inner.state.borrow_mut().dragging = true;
        self.inner.source.stop();
        self.inner.ensure_history_entry();
    }

    fn on_drag_update(&self, details: DragUpdateDetails) {
        if self.inner.rejects_after_teardown("drag update") {
            return;
        }
        self.inner.state.borrow_mut().dragging = true;

        let width = self.inner.resolved_width();
        let delta = self
            .inner
            .side
            .opening_direction(details.primary_delta.unwrap_or(0.0) / width);
        let value = (self.inner.source.value() + delta).clamp(0.0, 1.0);
        log::trace!("drag update {delta:+.4} -> {value:.4} (width {width})");
        self.inner.source.set_value(value);
        self.inner.sync_open_state(self.inner.source.value());
    }

    fn on_drag_end(&self, details: DragEndDetails) {
        if self.inner.rejects_after_teardown("drag end") {
            return;
        }
        self.inner.state.borrow_mut().dragging = false;
        if self.inner.source.status().is_dismissed() {
            self.inner.drop_entry_if_closed();
            return;
        }

        let velocity = details.horizontal_velocity();
        if velocity.abs() >= self.inner.config.min_fling_velocity {
            let visual_velocity = self
                .inner
                .side
                .opening_direction(velocity / self.inner.resolved_width());
            log::debug!("drag released at {velocity} px/s, flinging at {visual_velocity:.3}/s");
            self.inner.source.fling(visual_velocity);
        } else {
            self.inner.settle();
        }
    }

    fn on_drag_cancel(&self) {
        if self.inner.rejects_after_teardown("drag cancel") {
            return;
        }
        self.inner.state.borrow_mut().dragging = false;
        let source = &self.inner.source;
        let status = source.status();
        if status.rest_state().is_some() || source.is_animating() {
            self.inner.drop_entry_if_closed();
            return;
        }
        self.inner.settle();
    }
}

impl<C: 'static> DrawerInner<C> {
    fn resolved_width(&self) -> f32 {
        self.measured_width.resolve(self.config.default_width)
    }

    fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    fn rejects_after_teardown(&self, operation: &str) -> bool {
        let disposed = self.is_disposed();
        if disposed {
            log::warn!("{operation} ignored: drawer controller already torn down");
        }
        disposed
    }

    fn open(&self) {
        if self.rejects_after_teardown("open") {
            return;
        }
        self.source.fling(1.0);
        self.report_open_state(true, true);
    }

    fn close(&self) {
        if self.rejects_after_teardown("close") {
            return;
        }
        self.source.fling(-1.0);
        self.report_open_state(false, true);
    }

    /// Flings to whichever end the threshold puts the current value on.
    fn settle(&self) {
        let open = self.source.value() >= self.config.open_threshold;
        log::debug!(
            "settling {} from {:.3}",
            if open { "open" } else { "closed" },
            self.source.value()
        );
        self.source.fling(if open { 1.0 } else { -1.0 });
        self.report_open_state(open, false);
    }

    /// Reports threshold crossings between consecutive observed values.
    /// Forced reports never touch `value_open`.
    fn sync_open_state(&self, value: f32) {
        let open = value > self.config.open_threshold;
        {
            let mut state = self.state.borrow_mut();
            if state.value_open == open {
                return;
            }
            state.value_open = open;
        }
        self.report_open_state(open, false);
    }

    /// Invokes the owner callback when `opened` differs from the last report,
    /// or unconditionally when `force` is set.
    fn report_open_state(&self, opened: bool, force: bool) {
        {
            let mut state = self.state.borrow_mut();
            if state.disposed || (!force && state.previously_opened == opened) {
                return;
            }
            state.previously_opened = opened;
        }
        if let Some(callback) = &self.on_open_changed {
            callback(opened);
        }
    }

    fn on_value_changed(&self, value: f32) {
        if self.is_disposed() {
            return;
        }
        if let Some(redraw) = &self.redraw {
            redraw.request_redraw();
        }
        self.sync_open_state(value);
    }

    fn on_status_changed(self: &Rc<Self>, status: AnimationStatus) {
        if self.is_disposed() {
            return;
        }
        match status.trajectory() {
            Some(Trajectory::Forward) => self.ensure_history_entry(),
            Some(Trajectory::Reverse) => self.remove_history_entry(),
            None => {}
        }
    }

    fn ensure_history_entry(self: &Rc<Self>) {
        let Some(history) = &self.history else {
            return;
        };
        {
            let state = self.state.borrow();
            if state.disposed || state.history_entry.is_some() {
                return;
            }
        }

        let weak: Weak<Self> = Rc::downgrade(self);
        let handle = history.push(HistoryEntry::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handle_history_entry_removed();
            }
        }));
        self.state.borrow_mut().history_entry = Some(handle);
        log::debug!("drawer pushed history entry {}", handle.as_u64());

        if let Some((focus, scope)) = &self.focus {
            focus.request_first_focus(*scope);
        }
    }

    /// A gesture that ends without moving a closed drawer keeps no entry.
    fn drop_entry_if_closed(&self) {
        if self.source.value() <= 0.0 {
            self.remove_history_entry();
        }
    }

    fn remove_history_entry(&self) {
        let handle = self.state.borrow_mut().history_entry.take();
        if let (Some(handle), Some(history)) = (handle, &self.history) {
            history.remove(handle);
        }
    }

    fn handle_history_entry_removed(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.disposed {
                return;
            }
            state.history_entry = None;
        }
        log::debug!("drawer history entry removed externally, closing");
        self.close();
    }

    fn teardown(&self) {
        let listeners = {
            let mut state = self.state.borrow_mut();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.dragging = false;
            std::mem::take(&mut state.listeners)
        };
        log::debug!("drawer controller torn down at {:.3}", self.source.value());

        self.remove_history_entry();
        for id in listeners {
            self.source.remove_listener(id);
        }
        self.source.stop();
        self.source.dispose();
    }
}

impl<C: 'static> Drop for DrawerInner<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Assembles a [`DrawerController`] from its parameters and collaborators.
pub struct DrawerControllerBuilder<C: 'static> {
    side: Option<DrawerSide>,
    child: Option<Drawer<C>>,
    on_open_changed: Option<OpenChangedCallback>,
    source: Option<Rc<dyn ProgressSource>>,
    frame_clock: Option<FrameClock>,
    history: Option<Rc<dyn NavigationHistory>>,
    focus: Option<(Rc<dyn FocusScope>, FocusScopeId)>,
    measured_width: Option<MeasuredWidth>,
    redraw: Option<Rc<dyn RedrawRequester>>,
    config: DrawerConfig,
}

impl<C: 'static> Default for DrawerControllerBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> DrawerControllerBuilder<C> {
    pub fn new() -> Self {
        Self {
            side: None,
            child: None,
            on_open_changed: None,
            source: None,
            frame_clock: None,
            history: None,
            focus: None,
            measured_width: None,
            redraw: None,
            config: DrawerConfig::default(),
        }
    }

    pub fn side(mut self, side: DrawerSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn child(mut self, drawer: Drawer<C>) -> Self {
        self.child = Some(drawer);
        self
    }

    pub fn on_open_changed(mut self, callback: impl Fn(bool) + 'static) -> Self {
        self.on_open_changed = Some(Rc::new(callback));
        self
    }

    /// Uses an existing progress source. Takes precedence over
    /// [`frame_clock`](Self::frame_clock).
    pub fn progress_source(mut self, source: Rc<dyn ProgressSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Builds a [`ProgressAnimator`] on `clock` with the configured spring.
    pub fn frame_clock(mut self, clock: FrameClock) -> Self {
        self.frame_clock = Some(clock);
        self
    }

    pub fn history(mut self, history: Rc<dyn NavigationHistory>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn focus(mut self, focus: Rc<dyn FocusScope>, scope: FocusScopeId) -> Self {
        self.focus = Some((focus, scope));
        self
    }

    pub fn measured_width(mut self, measured_width: MeasuredWidth) -> Self {
        self.measured_width = Some(measured_width);
        self
    }

    pub fn redraw(mut self, redraw: Rc<dyn RedrawRequester>) -> Self {
        self.redraw = Some(redraw);
        self
    }

    pub fn config(mut self, config: DrawerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<DrawerController<C>, DrawerError> {
        let side = self.side.ok_or(DrawerError::MissingSide)?;
        let drawer = self.child.ok_or(DrawerError::MissingChild)?;
        self.config.validate()?;
        let source: Rc<dyn ProgressSource> = match (self.source, self.frame_clock) {
            (Some(source), _) => source,
            (None, Some(clock)) => {
                Rc::new(ProgressAnimator::new(clock).with_spring(self.config.spring))
            }
            (None, None) => return Err(DrawerError::MissingProgressSource),
        };

        let previously_opened = source.value() > self.config.open_threshold;
        let inner = Rc::new(DrawerInner {
            side,
            drawer,
            config: self.config,
            source,
            history: self.history,
            focus: self.focus,
            measured_width: self.measured_width.unwrap_or_default(),
            redraw: self.redraw,
            on_open_changed: self.on_open_changed,
            state: RefCell::new(DrawerState {
                previously_opened,
                value_open: previously_opened,
                ..DrawerState::default()
            }),
        });

        let value_listener = {
            let weak = Rc::downgrade(&inner);
            inner.source.add_value_listener(Box::new(move |value| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_value_changed(value);
                }
            }))
        };
        let status_listener = {
            let weak = Rc::downgrade(&inner);
            inner.source.add_status_listener(Box::new(move |status| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_status_changed(status);
                }
            }))
        };
        inner
            .state
            .borrow_mut()
            .listeners
            .extend([value_listener, status_listener]);

        log::debug!("drawer controller created on {side:?} side");
        Ok(DrawerController { inner })
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
