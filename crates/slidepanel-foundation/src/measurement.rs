//! Measured panel sizes shared from layout to interaction code.
//!
//! Layout records the panel's width every time it is measured; controllers
//! read it on demand. Nothing is cached on the reader side, so a relayout
//! between two gestures is picked up by the second one.

use slidepanel_ui_graphics::Size;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct MeasuredWidth {
    width: Rc<Cell<Option<f32>>>,
}

impl MeasuredWidth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, size: Size) {
        self.record_width(size.width);
    }

    /// Stores a measured width. Non-finite or non-positive widths count as
    /// "not laid out".
    pub fn record_width(&self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.width.set(Some(width));
        } else {
            log::trace!("ignoring unusable panel width {width}");
            self.width.set(None);
        }
    }

    /// Forgets the measurement, e.g. when the panel leaves the layout.
    pub fn clear(&self) {
        self.width.set(None);
    }

    pub fn get(&self) -> Option<f32> {
        self.width.get()
    }

    /// The measured width, or `fallback` if the panel was never laid out.
    pub fn resolve(&self, fallback: f32) -> f32 {
        self.width.get().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_until_measured() {
        let measured = MeasuredWidth::new();
        assert_eq!(measured.resolve(304.0), 304.0);

        measured.record(Size::new(280.0, 600.0));
        assert_eq!(measured.resolve(304.0), 280.0);

        measured.clear();
        assert_eq!(measured.get(), None);
    }

    #[test]
    fn unusable_widths_are_treated_as_unmeasured() {
        let measured = MeasuredWidth::new();
        measured.record_width(300.0);
        measured.record_width(0.0);
        assert_eq!(measured.resolve(304.0), 304.0);

        measured.record_width(f32::NAN);
        assert_eq!(measured.get(), None);
    }

    #[test]
    fn clones_observe_the_same_measurement() {
        let layout_side = MeasuredWidth::new();
        let reader = layout_side.clone();
        layout_side.record_width(512.0);
        assert_eq!(reader.get(), Some(512.0));
    }
}
