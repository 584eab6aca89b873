//! Alignment utilities for positioning content

use slidepanel_ui_graphics::{Point, Rect, Size};

/// Alignment across both axes used for positioning content within a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Horizontal alignment component.
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment component.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Vertically centered against the leading edge.
    pub const CENTER_START: Self =
        Self::new(HorizontalAlignment::Start, VerticalAlignment::CenterVertically);

    /// Vertically centered against the trailing edge.
    pub const CENTER_END: Self =
        Self::new(HorizontalAlignment::End, VerticalAlignment::CenterVertically);

    /// Offset of `child` inside `container`. Oversized children get negative
    /// offsets so that the aligned edge stays put.
    pub fn place(&self, container: Size, child: Size) -> Point {
        Point::new(
            self.horizontal.align(container.width, child.width),
            self.vertical.align(container.height, child.height),
        )
    }
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Start,
    CenterHorizontally,
    End,
}

impl HorizontalAlignment {
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => (available - child) / 2.0,
            HorizontalAlignment::End => available - child,
        }
    }

    /// The alignment on the opposite side of the axis.
    pub fn flipped(&self) -> Self {
        match self {
            HorizontalAlignment::Start => HorizontalAlignment::End,
            HorizontalAlignment::CenterHorizontally => HorizontalAlignment::CenterHorizontally,
            HorizontalAlignment::End => HorizontalAlignment::Start,
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => (available - child) / 2.0,
            VerticalAlignment::Bottom => available - child,
        }
    }
}

/// Places `child` through two nested aligners.
///
/// The outer aligner sizes itself to `child.width * width_factor` (clamped to
/// [0, 1]) and sits inside `container` at `outer`; the child is then aligned
/// inside that box at `inner`. With opposite outer and inner alignments this
/// reveals the child progressively from the outer edge.
pub fn place_with_width_factor(
    outer: Alignment,
    inner: Alignment,
    container: Size,
    child: Size,
    width_factor: f32,
) -> Rect {
    let factor = width_factor.clamp(0.0, 1.0);
    let window = Size::new(child.width * factor, child.height.min(container.height));
    let window_origin = outer.place(container, window);
    let child_offset = inner.place(window, child);
    Rect::from_origin_size(
        Point::new(
            window_origin.x + child_offset.x,
            window_origin.y + child_offset.y,
        ),
        child,
    )
}
