//! Color representation and interpolation

/// Linear RGBA color with components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self(
            ((argb >> 16) & 0xff) as f32 / 255.0,
            ((argb >> 8) & 0xff) as f32 / 255.0,
            (argb & 0xff) as f32 / 255.0,
            ((argb >> 24) & 0xff) as f32 / 255.0,
        )
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    /// Component-wise interpolation; `fraction` is clamped to [0, 1].
    pub fn lerp(&self, target: &Color, fraction: f32) -> Color {
        let t = fraction.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color(
            mix(self.0, target.0),
            mix(self.1, target.1),
            mix(self.2, target.2),
            mix(self.3, target.3),
        )
    }

    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
    /// Black at 54% opacity, the material modal barrier color.
    pub const BLACK_54: Color = Color::from_argb_u32(0x8A00_0000);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        let from = Color::TRANSPARENT;
        let to = Color::BLACK_54;
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert_eq!(from.lerp(&to, 4.0), to);
    }

    #[test]
    fn black_54_alpha_matches_hex() {
        assert!((Color::BLACK_54.a() - 138.0 / 255.0).abs() < f32::EPSILON);
    }
}
