//! Shared gesture constants.
//!
//! Values are in logical pixels and match common platform conventions.

/// Minimum release speed, in logical pixels per second, for a drag to count
/// as a fling.
pub const MIN_FLING_VELOCITY: f32 = 365.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density. Release velocities are clamped to this magnitude.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
