/// Width of a drawer panel that has not been laid out yet.
pub const DRAWER_WIDTH: f32 = 304.0;

/// Minimum width of the strip along the screen edge that accepts drags while
/// the drawer is closed.
pub const EDGE_DRAG_WIDTH: f32 = 20.0;

pub const DRAWER_ELEVATION: f32 = 16.0;

/// Progress above which the drawer counts as open, and the point a released
/// drag settles around.
pub const OPEN_THRESHOLD: f32 = 0.5;
