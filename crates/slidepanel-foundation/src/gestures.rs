//! Single-axis drag gesture stream.
//!
//! A gesture is delivered as `Down`, any number of `Update`s, then exactly one
//! of `End` or `Cancel`. Recognition from raw pointer input happens upstream.

use slidepanel_ui_graphics::Point;

use crate::gesture_constants::MAX_FLING_VELOCITY;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub pixels_per_second: Point,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity {
        pixels_per_second: Point::ZERO,
    };

    pub fn horizontal(pixels_per_second: f32) -> Self {
        Self {
            pixels_per_second: Point::new(pixels_per_second, 0.0),
        }
    }

    /// Scales the velocity down so its magnitude does not exceed `max`.
    pub fn clamp_magnitude(self, max: f32) -> Self {
        let Point { x, y } = self.pixels_per_second;
        let magnitude = (x * x + y * y).sqrt();
        if magnitude <= max || magnitude == 0.0 {
            return self;
        }
        let scale = max / magnitude;
        Self {
            pixels_per_second: Point::new(x * scale, y * scale),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragDownDetails {
    pub global_position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragUpdateDetails {
    pub delta: Point,
    /// Movement along the recognizer's axis, when it has one.
    pub primary_delta: Option<f32>,
    pub global_position: Point,
}

impl DragUpdateDetails {
    pub fn horizontal(delta: f32) -> Self {
        Self {
            delta: Point::new(delta, 0.0),
            primary_delta: Some(delta),
            global_position: Point::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragEndDetails {
    pub velocity: Velocity,
}

impl DragEndDetails {
    pub fn horizontal(pixels_per_second: f32) -> Self {
        Self {
            velocity: Velocity::horizontal(pixels_per_second),
        }
    }

    /// Horizontal release speed with the magnitude capped at
    /// [`MAX_FLING_VELOCITY`].
    pub fn horizontal_velocity(&self) -> f32 {
        self.velocity
            .clamp_magnitude(MAX_FLING_VELOCITY)
            .pixels_per_second
            .x
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Down(DragDownDetails),
    Update(DragUpdateDetails),
    End(DragEndDetails),
    Cancel,
}

/// Receiver of a drag gesture stream.
pub trait DragHandler {
    fn on_drag_down(&self, details: DragDownDetails);

    fn on_drag_update(&self, details: DragUpdateDetails);

    fn on_drag_end(&self, details: DragEndDetails);

    fn on_drag_cancel(&self);

    fn dispatch_drag(&self, event: DragEvent) {
        match event {
            DragEvent::Down(details) => self.on_drag_down(details),
            DragEvent::Update(details) => self.on_drag_update(details),
            DragEvent::End(details) => self.on_drag_end(details),
            DragEvent::Cancel => self.on_drag_cancel(),
        }
    }
}
