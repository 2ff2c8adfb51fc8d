use core::ops::{Add, Mul};

use crate::coords::clamp_scalar;

/// Straight (non-premultiplied) RGB color.
///
/// Channels are expected in `[0, 1]` but are stored verbatim: anchors keep
/// whatever the caller supplied, and blending never clamps except where an
/// interpolation mode says so.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Creates a color from sRGB bytes (`0`–`255`), mapped linearly to `[0, 1]`.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Quantises to bytes with round-to-nearest, clamping out-of-range channels.
    ///
    /// This matches what a `Rgba8Unorm` render target stores for the same value.
    #[inline]
    pub fn to_u8(self) -> [u8; 3] {
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Clamps all channels to `[0, 1]`; NaN channels become 0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            clamp_scalar(self.r, 0.0, 1.0),
            clamp_scalar(self.g, 0.0, 1.0),
            clamp_scalar(self.b, 0.0, 1.0),
        )
    }

    /// `(1 - t)·a + t·b`, exact at both endpoints.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }
}

#[inline]
fn quantize(c: f32) -> u8 {
    (clamp_scalar(c, 0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

impl Add for Rgb {
    type Output = Rgb;
    #[inline]
    fn add(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f32> for Rgb {
    type Output = Rgb;
    #[inline]
    fn mul(self, rhs: f32) -> Rgb {
        Rgb::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_spans_unit_range() {
        assert_eq!(Rgb::from_u8(0, 0, 0), Rgb::black());
        assert_eq!(Rgb::from_u8(255, 255, 255), Rgb::white());
    }

    #[test]
    fn to_u8_rounds_to_nearest() {
        assert_eq!(Rgb::new(0.5, 1.0 / 255.0, 0.499 / 255.0).to_u8(), [128, 1, 0]);
    }

    #[test]
    fn to_u8_clamps_out_of_range() {
        assert_eq!(Rgb::new(-0.2, 1.7, f32::NAN).to_u8(), [0, 255, 0]);
    }

    #[test]
    fn byte_round_trip_is_lossless() {
        for v in [0u8, 1, 17, 128, 254, 255] {
            assert_eq!(Rgb::from_u8(v, v, v).to_u8(), [v, v, v]);
        }
    }
}
