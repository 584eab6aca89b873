//! Per-frame description of the drawer layer.
//!
//! While closed the drawer is only a thin strip along its edge that listens
//! for drags. Once progress leaves 0 it becomes a modal layer: a scrim that
//! fades in over the content and the panel revealed by `width_factor`.

use slidepanel_animation::AnimationStatus;
use slidepanel_ui_graphics::{Color, EdgeInsets, Point, Rect, Size};
use slidepanel_ui_layout::{place_with_width_factor, Alignment};

use crate::config::DrawerConfig;
use crate::drawer::DrawerSide;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerLayer {
    EdgeStrip {
        alignment: Alignment,
        width: f32,
    },
    Modal {
        scrim: Color,
        width_factor: f32,
        outer_alignment: Alignment,
        inner_alignment: Alignment,
    },
}

/// Which gesture callbacks the layer should be wired to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcceptedGestures {
    pub drag_down: bool,
    pub drag_update: bool,
    pub drag_end: bool,
    pub drag_cancel: bool,
    pub scrim_tap: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerVisuals {
    pub side: DrawerSide,
    pub progress: f32,
    pub layer: DrawerLayer,
}

impl DrawerVisuals {
    pub fn compute(
        side: DrawerSide,
        progress: f32,
        status: AnimationStatus,
        insets: EdgeInsets,
        config: &DrawerConfig,
    ) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let layer = if status.is_dismissed() {
            DrawerLayer::EdgeStrip {
                alignment: side.outer_alignment(),
                width: side.inset(insets).max(config.edge_drag_width),
            }
        } else {
            DrawerLayer::Modal {
                scrim: Color::TRANSPARENT.lerp(&config.scrim_color, progress),
                width_factor: progress,
                outer_alignment: side.outer_alignment(),
                inner_alignment: side.inner_alignment(),
            }
        };
        Self {
            side,
            progress,
            layer,
        }
    }

    pub fn is_modal(&self) -> bool {
        matches!(self.layer, DrawerLayer::Modal { .. })
    }

    pub fn scrim(&self) -> Option<Color> {
        match self.layer {
            DrawerLayer::Modal { scrim, .. } => Some(scrim),
            DrawerLayer::EdgeStrip { .. } => None,
        }
    }

    /// A closed drawer has no down/cancel handlers; a drag from the edge
    /// strip opens it through updates alone.
    pub fn accepted_gestures(&self) -> AcceptedGestures {
        let modal = self.is_modal();
        AcceptedGestures {
            drag_down: modal,
            drag_update: true,
            drag_end: true,
            drag_cancel: modal,
            scrim_tap: modal,
        }
    }

    /// Hit area of the edge strip, if the drawer is closed.
    pub fn edge_strip_rect(&self, viewport: Size) -> Option<Rect> {
        match self.layer {
            DrawerLayer::EdgeStrip { alignment, width } => {
                let strip = Size::new(width.min(viewport.width), viewport.height);
                Some(Rect::from_origin_size(alignment.place(viewport, strip), strip))
            }
            DrawerLayer::Modal { .. } => None,
        }
    }

    /// Where the panel of size `panel` is drawn, if the layer is modal.
    pub fn panel_rect(&self, viewport: Size, panel: Size) -> Option<Rect> {
        match self.layer {
            DrawerLayer::Modal {
                width_factor,
                outer_alignment,
                inner_alignment,
                ..
            } => Some(place_with_width_factor(
                outer_alignment,
                inner_alignment,
                viewport,
                panel,
                width_factor,
            )),
            DrawerLayer::EdgeStrip { .. } => None,
        }
    }

    /// Area covered by the scrim, if the layer is modal.
    pub fn scrim_rect(&self, viewport: Size) -> Option<Rect> {
        self.is_modal()
            .then(|| Rect::from_origin_size(Point::ZERO, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidepanel_ui_layout::HorizontalAlignment;

    const VIEWPORT: Size = Size {
        width: 1000.0,
        height: 700.0,
    };

    #[test]
    fn dismissed_drawer_is_an_edge_strip() {
        let visuals = DrawerVisuals::compute(
            DrawerSide::Start,
            0.0,
            AnimationStatus::DISMISSED,
            EdgeInsets::ZERO,
            &DrawerConfig::default(),
        );
        assert_eq!(
            visuals.layer,
            DrawerLayer::EdgeStrip {
                alignment: Alignment::CENTER_START,
                width: 20.0
            }
        );
        let gestures = visuals.accepted_gestures();
        assert!(!gestures.drag_down && !gestures.drag_cancel && !gestures.scrim_tap);
        assert!(gestures.drag_update && gestures.drag_end);
        assert_eq!(visuals.panel_rect(VIEWPORT, Size::new(304.0, 700.0)), None);
    }

    #[test]
    fn edge_strip_grows_with_safe_area() {
        let visuals = DrawerVisuals::compute(
            DrawerSide::End,
            0.0,
            AnimationStatus::DISMISSED,
            EdgeInsets::from_components(0.0, 0.0, 44.0, 0.0),
            &DrawerConfig::default(),
        );
        let strip = visuals.edge_strip_rect(VIEWPORT).expect("closed drawer has a strip");
        assert_eq!(strip.width, 44.0);
        assert_eq!(strip.x, 956.0);
    }

    #[test]
    fn moving_drawer_is_modal_with_faded_scrim() {
        let config = DrawerConfig::default();
        let visuals = DrawerVisuals::compute(
            DrawerSide::End,
            0.5,
            AnimationStatus::FORWARD,
            EdgeInsets::ZERO,
            &config,
        );
        let DrawerLayer::Modal {
            scrim,
            width_factor,
            outer_alignment,
            inner_alignment,
        } = visuals.layer
        else {
            panic!("expected modal layer, got {:?}", visuals.layer);
        };
        assert_eq!(width_factor, 0.5);
        assert!((scrim.a() - config.scrim_color.a() * 0.5).abs() < 1e-6);
        assert_eq!(outer_alignment.horizontal, HorizontalAlignment::End);
        assert_eq!(inner_alignment.horizontal, HorizontalAlignment::Start);

        let panel = visuals
            .panel_rect(VIEWPORT, Size::new(300.0, 700.0))
            .expect("modal layer places the panel");
        assert_eq!(panel.x, 850.0);
        assert!(visuals.accepted_gestures().scrim_tap);
        assert_eq!(
            visuals.scrim_rect(VIEWPORT),
            Some(Rect::from_origin_size(Point::ZERO, VIEWPORT))
        );
    }

    #[test]
    fn completed_drawer_shows_full_scrim() {
        let config = DrawerConfig::default();
        let visuals = DrawerVisuals::compute(
            DrawerSide::Start,
            1.0,
            AnimationStatus::COMPLETED,
            EdgeInsets::ZERO,
            &config,
        );
        assert_eq!(visuals.scrim(), Some(config.scrim_color));
        let panel = visuals
            .panel_rect(VIEWPORT, Size::new(304.0, 700.0))
            .expect("modal layer places the panel");
        assert_eq!(panel.x, 0.0);
    }
}
