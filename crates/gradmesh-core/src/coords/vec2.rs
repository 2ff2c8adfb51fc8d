use core::ops::{Add, Mul, Sub};

/// 2D vector in mesh space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Clamps both components into `[lo, hi]`.
    ///
    /// NaN components collapse to `lo` so a clamped vector is always finite.
    #[inline]
    pub fn clamp(self, lo: f32, hi: f32) -> Self {
        Self::new(clamp_scalar(self.x, lo, hi), clamp_scalar(self.y, lo, hi))
    }

    /// Linear interpolation written as `(1 - t)·a + t·b`.
    ///
    /// This form returns `a` exactly at `t = 0` and `b` exactly at `t = 1`,
    /// which keeps shared patch edges bit-identical.
    #[inline]
    pub fn lerp(self, other: Vec2, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f32 {
        (self - other).length_squared()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

/// `f32::clamp` that maps NaN to `lo` instead of propagating it.
#[inline]
pub(crate) fn clamp_scalar(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}
