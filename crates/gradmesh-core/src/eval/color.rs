//! Corner-color blending inside a cell.

use crate::paint::Rgb;

/// How the per-cell evaluator blends the cell's four corner colors.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ColorInterpolation {
    /// Bilinear blend of the corner colors.
    #[default]
    Bilinear,
    /// Cubic Hermite blend of the corner colors: bilinear over
    /// smoothstepped local coordinates. Reads only the cell's own corners,
    /// passes through them exactly and has zero cross-edge slope, so
    /// neighbouring cells meet with matching value and derivative.
    Bicubic,
}

impl ColorInterpolation {
    /// Tag used by GPU parameter blocks.
    #[inline]
    pub const fn tag(self) -> u32 {
        match self {
            ColorInterpolation::Bilinear => 0,
            ColorInterpolation::Bicubic => 1,
        }
    }
}

/// Bilinear blend of corners in TL, TR, BL, BR order.
#[inline]
pub fn bilinear(colors: [Rgb; 4], u: f32, v: f32) -> Rgb {
    let top = colors[0].lerp(colors[1], u);
    let bottom = colors[2].lerp(colors[3], u);
    top.lerp(bottom, v)
}

/// Cubic Hermite ease `t²(3 - 2t)`; exactly 0 at 0 and 1 at 1.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Bicubic blend of corners in TL, TR, BL, BR order.
#[inline]
pub fn bicubic(colors: [Rgb; 4], u: f32, v: f32) -> Rgb {
    bilinear(colors, smoothstep(u), smoothstep(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshState;
    use crate::patch::Patch;

    #[test]
    fn bilinear_center_is_average() {
        let c = [Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 1.0, 0.0), Rgb::new(0.0, 0.0, 1.0), Rgb::white()];
        let m = bilinear(c, 0.5, 0.5);
        assert_eq!(m, Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn bilinear_corners_are_exact() {
        let c = [Rgb::new(0.1, 0.2, 0.3), Rgb::new(0.4, 0.5, 0.6), Rgb::new(0.7, 0.8, 0.9), Rgb::new(0.3, 0.3, 0.3)];
        assert_eq!(bilinear(c, 0.0, 0.0), c[0]);
        assert_eq!(bilinear(c, 1.0, 0.0), c[1]);
        assert_eq!(bilinear(c, 0.0, 1.0), c[2]);
        assert_eq!(bilinear(c, 1.0, 1.0), c[3]);
    }

    #[test]
    fn smoothstep_ends_are_exact() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
    }

    #[test]
    fn bicubic_reproduces_corner_colors() {
        let c = [Rgb::new(0.1, 0.2, 0.3), Rgb::new(0.4, 0.5, 0.6), Rgb::new(0.7, 0.8, 0.9), Rgb::new(0.3, 0.3, 0.3)];
        assert_eq!(bicubic(c, 0.0, 0.0), c[0]);
        assert_eq!(bicubic(c, 1.0, 0.0), c[1]);
        assert_eq!(bicubic(c, 0.0, 1.0), c[2]);
        assert_eq!(bicubic(c, 1.0, 1.0), c[3]);
    }

    #[test]
    fn bicubic_eases_toward_nearer_corner() {
        let c = [Rgb::black(), Rgb::white(), Rgb::black(), Rgb::white()];
        let lin = bilinear(c, 0.25, 0.5);
        let cub = bicubic(c, 0.25, 0.5);
        assert!(cub.r < lin.r);
        assert_eq!(bicubic(c, 0.5, 0.5), bilinear(c, 0.5, 0.5));
    }

    #[test]
    fn bicubic_ignores_anchors_outside_the_cell() {
        let m = MeshState::initialize(4, 4).unwrap();
        let recolored = m.set_color(2, Rgb::new(0.0, 1.0, 0.0)).unwrap();
        let a = Patch::build(&m, 0, 0);
        let b = Patch::build(&recolored, 0, 0);
        assert_eq!(bicubic(a.colors, 0.5, 0.5), bicubic(b.colors, 0.5, 0.5));
    }
}
