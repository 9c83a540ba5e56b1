//! RGB colors and color-space conversion.
//!
//! Colors travel through the pipeline in linear RGB. Material models that
//! expect display-referred input get the sRGB-encoded form via
//! [`linear_rgb_to_srgb`].

use std::fmt;

/// An RGB triple (f32 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color3 {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a color from its channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color.
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Clamp every channel to be at least `min`.
    #[must_use]
    pub fn clamp_low(self, min: f32) -> Self {
        Self::new(self.r.max(min), self.g.max(min), self.b.max(min))
    }

    /// Whether every channel is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Channels as an array.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `f` to each channel.
    #[must_use]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<[f32; 3]> for Color3 {
    fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Color3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// Encode one linear channel with the sRGB transfer function.
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Decode one sRGB channel to linear.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear RGB color to sRGB.
pub fn linear_rgb_to_srgb(linear_rgb: Color3) -> Color3 {
    linear_rgb.map(linear_to_srgb)
}

/// Convert an sRGB color to linear RGB.
pub fn srgb_to_linear_rgb(srgb: Color3) -> Color3 {
    srgb.map(srgb_to_linear)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Color3, b: Color3) {
        assert!((a.r - b.r).abs() < 1e-5, "{a:?} vs {b:?}");
        assert!((a.g - b.g).abs() < 1e-5, "{a:?} vs {b:?}");
        assert!((a.b - b.b).abs() < 1e-5, "{a:?} vs {b:?}");
    }

    #[test]
    fn srgb_endpoints() {
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn mid_gray_brightens() {
        let srgb = linear_to_srgb(0.18);
        assert!((srgb - 0.4613).abs() < 1e-3);
    }

    #[test]
    fn linear_segment_below_threshold() {
        assert!((linear_to_srgb(0.001) - 0.01292).abs() < 1e-7);
        assert!((srgb_to_linear(0.01292) - 0.001).abs() < 1e-7);
    }

    #[test]
    fn color_space_roundtrip() {
        for c in [
            Color3::new(0.0, 0.5, 1.0),
            Color3::new(0.002, 0.2, 0.9),
            Color3::gray(0.75),
        ] {
            assert_close(srgb_to_linear_rgb(linear_rgb_to_srgb(c)), c);
        }
    }

    #[test]
    fn clamp_low_and_zero() {
        let c = Color3::new(-1.0, 0.0, -0.5).clamp_low(0.0);
        assert!(c.is_zero());
        assert!(!Color3::new(0.0, 0.1, 0.0).clamp_low(0.0).is_zero());
    }

    #[test]
    fn from_rgb8() {
        assert_close(Color3::from_rgb8(255, 0, 51), Color3::new(1.0, 0.0, 0.2));
    }
}
