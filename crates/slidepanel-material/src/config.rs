use slidepanel_animation::SpringSpec;
use slidepanel_foundation::gesture_constants::MIN_FLING_VELOCITY;
use slidepanel_ui_graphics::Color;

use crate::constants::{DRAWER_WIDTH, EDGE_DRAG_WIDTH, OPEN_THRESHOLD};
use crate::error::DrawerError;

/// Tunables for a drawer controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Width used to normalize drags until the panel has been measured.
    pub default_width: f32,
    pub edge_drag_width: f32,
    /// Release speed in px/s at or above which a drag end flings.
    pub min_fling_velocity: f32,
    /// Shared by the settle decision and the open/closed report.
    pub open_threshold: f32,
    /// Barrier color at full progress; it fades in from transparent.
    pub scrim_color: Color,
    /// Spring used when the controller builds its own animator.
    pub spring: SpringSpec,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            default_width: DRAWER_WIDTH,
            edge_drag_width: EDGE_DRAG_WIDTH,
            min_fling_velocity: MIN_FLING_VELOCITY,
            open_threshold: OPEN_THRESHOLD,
            scrim_color: Color::BLACK_54,
            spring: SpringSpec::fling(),
        }
    }
}

impl DrawerConfig {
    pub fn with_default_width(mut self, width: f32) -> Self {
        self.default_width = width;
        self
    }

    pub fn with_edge_drag_width(mut self, width: f32) -> Self {
        self.edge_drag_width = width;
        self
    }

    pub fn with_min_fling_velocity(mut self, velocity: f32) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    pub fn with_open_threshold(mut self, threshold: f32) -> Self {
        self.open_threshold = threshold;
        self
    }

    pub fn with_scrim_color(mut self, color: Color) -> Self {
        self.scrim_color = color;
        self
    }

    pub fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    pub fn validate(&self) -> Result<(), DrawerError> {
        if !(self.default_width.is_finite() && self.default_width > 0.0) {
            return Err(DrawerError::InvalidConfig {
                field: "default_width",
                reason: "must be a positive finite width",
            });
        }
        if !(self.edge_drag_width.is_finite() && self.edge_drag_width >= 0.0) {
            return Err(DrawerError::InvalidConfig {
                field: "edge_drag_width",
                reason: "must be a non-negative finite width",
            });
        }
        if !(self.min_fling_velocity.is_finite() && self.min_fling_velocity > 0.0) {
            return Err(DrawerError::InvalidConfig {
                field: "min_fling_velocity",
                reason: "must be a positive finite speed",
            });
        }
        if !(self.open_threshold > 0.0 && self.open_threshold < 1.0) {
            return Err(DrawerError::InvalidConfig {
                field: "open_threshold",
                reason: "must lie strictly between 0 and 1",
            });
        }
        if !(self.spring.stiffness > 0.0 && self.spring.damping_ratio > 0.0) {
            return Err(DrawerError::InvalidConfig {
                field: "spring",
                reason: "stiffness and damping ratio must be positive",
            });
        }
        Ok(())
    }
}
