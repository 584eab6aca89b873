use slidepanel_ui_graphics::{EdgeInsets, Size};
use slidepanel_ui_layout::Alignment;

use crate::constants::{DRAWER_ELEVATION, DRAWER_WIDTH};

/// Screen edge a drawer is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawerSide {
    Start,
    End,
}

impl DrawerSide {
    /// Converts a movement along the horizontal axis into opening progress
    /// direction: positive means "towards open" for either side.
    pub fn opening_direction(self, horizontal: f32) -> f32 {
        match self {
            DrawerSide::Start => horizontal,
            DrawerSide::End => -horizontal,
        }
    }

    /// Where the drawer layer sits inside the viewport.
    pub fn outer_alignment(self) -> Alignment {
        match self {
            DrawerSide::Start => Alignment::CENTER_START,
            DrawerSide::End => Alignment::CENTER_END,
        }
    }

    /// Where the panel sits inside its partially revealed window.
    pub fn inner_alignment(self) -> Alignment {
        match self {
            DrawerSide::Start => Alignment::CENTER_END,
            DrawerSide::End => Alignment::CENTER_START,
        }
    }

    /// Safe-area inset on this side of the screen.
    pub fn inset(self, insets: EdgeInsets) -> f32 {
        match self {
            DrawerSide::Start => insets.left,
            DrawerSide::End => insets.right,
        }
    }
}

/// Static drawer panel: a fixed-width elevated surface holding `child`.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawer<C> {
    child: C,
    elevation: f32,
}

impl<C> Drawer<C> {
    pub fn new(child: C) -> Self {
        Self {
            child,
            elevation: DRAWER_ELEVATION,
        }
    }

    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn child(&self) -> &C {
        &self.child
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// The panel fills the viewport height at the drawer width.
    pub fn size_in(&self, viewport: Size) -> Size {
        Size::new(DRAWER_WIDTH, viewport.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidepanel_ui_layout::HorizontalAlignment;

    #[test]
    fn end_side_mirrors_direction_and_alignment() {
        assert_eq!(DrawerSide::Start.opening_direction(12.0), 12.0);
        assert_eq!(DrawerSide::End.opening_direction(12.0), -12.0);
        assert_eq!(
            DrawerSide::End.outer_alignment().horizontal,
            HorizontalAlignment::End
        );
        assert_eq!(
            DrawerSide::End.inner_alignment().horizontal,
            HorizontalAlignment::Start
        );
    }

    #[test]
    fn inset_follows_side() {
        let insets = EdgeInsets::from_components(8.0, 0.0, 32.0, 0.0);
        assert_eq!(DrawerSide::Start.inset(insets), 8.0);
        assert_eq!(DrawerSide::End.inset(insets), 32.0);
    }

    #[test]
    fn drawer_shell_has_fixed_width() {
        let drawer = Drawer::new("menu").with_elevation(4.0);
        assert_eq!(drawer.size_in(Size::new(1080.0, 1920.0)), Size::new(304.0, 1920.0));
        assert_eq!(drawer.elevation(), 4.0);
        assert_eq!(*drawer.child(), "menu");
    }
}
