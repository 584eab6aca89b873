//! Pure math/data for drawing in slidepanel
//!
//! Geometry primitives and colors consumed by layout and the drawer layer.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
