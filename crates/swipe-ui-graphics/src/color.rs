//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Component-wise linear blend toward `other`.
    pub fn blend(&self, other: &Color, fraction: f32) -> Self {
        Self(
            self.0 + (other.0 - self.0) * fraction,
            self.1 + (other.1 - self.1) * fraction,
            self.2 + (other.2 - self.2) * fraction,
            self.3 + (other.3 - self.3) * fraction,
        )
    }

    /// Every component limited to [0, 1].
    pub fn clamped(&self) -> Self {
        Self(
            self.0.clamp(0.0, 1.0),
            self.1.clamp(0.0, 1.0),
            self.2.clamp(0.0, 1.0),
            self.3.clamp(0.0, 1.0),
        )
    }

    // Common color constants
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
    pub const LIGHT_GRAY: Color = Color(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);
    pub const BROWN: Color = Color(0.6, 0.4, 0.2, 1.0);
    pub const PURPLE: Color = Color(0.5, 0.0, 0.5, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_match_inputs() {
        assert_eq!(Color::RED.blend(&Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::RED.blend(&Color::BLUE, 1.0), Color::BLUE);
    }

    #[test]
    fn blend_midpoint_is_average() {
        let mid = Color::BLACK.blend(&Color::WHITE, 0.5);
        assert_eq!(mid, Color(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn overshooting_blend_clamps_into_range() {
        let past = Color::RED.blend(&Color::WHITE, 1.2).clamped();
        assert_eq!(past, Color::WHITE);
        let before = Color::RED.blend(&Color::WHITE, -0.2).clamped();
        assert_eq!(before, Color::RED);
    }
}
