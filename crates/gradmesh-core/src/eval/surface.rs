use crate::coords::{clamp_scalar, Vec2};
use crate::locate::locate_in;
use crate::mesh::MeshState;
use crate::paint::Rgb;
use crate::patch::Patch;

use super::{bezier, color, ColorInterpolation};

/// Evaluated surface point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub position: Vec2,
    pub color: Rgb,
}

/// Per-cell bicubic Bézier evaluator over a borrowed mesh snapshot.
///
/// Holds no state of its own beyond the borrow: every call rebuilds the
/// cell's patch from the mesh, so results depend only on
/// `(mesh, interpolation, query)`.
#[derive(Debug, Copy, Clone)]
pub struct SurfaceEvaluator<'m> {
    mesh: &'m MeshState,
    interpolation: ColorInterpolation,
}

impl<'m> SurfaceEvaluator<'m> {
    #[inline]
    pub fn new(mesh: &'m MeshState, interpolation: ColorInterpolation) -> Self {
        Self { mesh, interpolation }
    }

    /// Evaluates cell `(col, row)` at `local`.
    ///
    /// `local` is clamped into `[0, 1]²`; on a single-anchor axis the local
    /// parameter is pinned to 0.
    pub fn evaluate_cell(&self, col: usize, row: usize, local: Vec2) -> Sample {
        let axes = self.mesh.degenerate_axes();
        let u = if axes.u { 0.0 } else { clamp_scalar(local.x, 0.0, 1.0) };
        let v = if axes.v { 0.0 } else { clamp_scalar(local.y, 0.0, 1.0) };

        let patch = Patch::build(self.mesh, col, row);
        let position = bezier::bicubic(&patch, Vec2::new(u, v));
        let color = match self.interpolation {
            ColorInterpolation::Bilinear => color::bilinear(patch.colors, u, v),
            ColorInterpolation::Bicubic => color::bicubic(patch.colors, u, v),
        };

        Sample { position, color }
    }

    /// Locates `(u, v)` and evaluates the owning cell. Total over all inputs.
    pub fn evaluate(&self, u: f32, v: f32) -> Sample {
        let cell = locate_in(self.mesh, u, v);
        self.evaluate_cell(cell.col, cell.row, cell.local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Direction;

    fn bent_mesh() -> MeshState {
        MeshState::initialize(3, 3)
            .unwrap()
            .move_point(4, 0.62, 0.41)
            .unwrap()
            .update_handle(4, Direction::Left, -0.2, 0.13)
            .unwrap()
            .update_handle(1, Direction::Bottom, 0.08, 0.3)
            .unwrap()
            .set_color(4, Rgb::new(0.9, 0.1, 0.4))
            .unwrap()
    }

    #[test]
    fn corners_evaluate_to_anchors() {
        let m = bent_mesh();
        let e = SurfaceEvaluator::new(&m, ColorInterpolation::Bilinear);
        let s = e.evaluate_cell(0, 0, Vec2::new(1.0, 1.0));
        assert_eq!(s.position, m.anchor(4).unwrap().position);
        assert_eq!(s.color, m.anchor(4).unwrap().color);
    }

    #[test]
    fn horizontal_neighbours_agree_on_shared_edge() {
        let m = bent_mesh();
        for mode in [ColorInterpolation::Bilinear, ColorInterpolation::Bicubic] {
            let e = SurfaceEvaluator::new(&m, mode);
            for v in [0.0, 0.2, 0.5, 0.9, 1.0] {
                let left = e.evaluate_cell(0, 1, Vec2::new(1.0, v));
                let right = e.evaluate_cell(1, 1, Vec2::new(0.0, v));
                assert_eq!(left, right, "mode {mode:?}, v {v}");
            }
        }
    }

    #[test]
    fn vertical_neighbours_agree_on_shared_edge() {
        let m = bent_mesh();
        let e = SurfaceEvaluator::new(&m, ColorInterpolation::Bilinear);
        for u in [0.0, 0.3, 0.5, 1.0] {
            let top = e.evaluate_cell(1, 0, Vec2::new(u, 1.0));
            let bottom = e.evaluate_cell(1, 1, Vec2::new(u, 0.0));
            assert_eq!(top, bottom, "u {u}");
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let m = bent_mesh();
        let e = SurfaceEvaluator::new(&m, ColorInterpolation::Bicubic);
        let a = e.evaluate(0.37, 0.81);
        let b = e.evaluate(0.37, 0.81);
        assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        assert_eq!(a.color.r.to_bits(), b.color.r.to_bits());
    }

    #[test]
    fn degenerate_grids_stay_finite() {
        for (w, h) in [(1, 1), (1, 4), (4, 1)] {
            let m = MeshState::initialize(w, h).unwrap();
            let e = SurfaceEvaluator::new(&m, ColorInterpolation::Bicubic);
            for (u, v) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (0.3, 0.9)] {
                let s = e.evaluate(u, v);
                assert!(s.position.is_finite() && s.color.is_finite(), "{w}x{h} at ({u}, {v})");
            }
        }
    }

    #[test]
    fn cell_color_depends_only_on_its_corners() {
        let m = MeshState::initialize(4, 4).unwrap();
        let recolored = m.set_color(2, Rgb::new(0.0, 1.0, 0.0)).unwrap();
        for mode in [ColorInterpolation::Bilinear, ColorInterpolation::Bicubic] {
            let before = SurfaceEvaluator::new(&m, mode).evaluate_cell(0, 0, Vec2::new(0.5, 0.5));
            let after = SurfaceEvaluator::new(&recolored, mode).evaluate_cell(0, 0, Vec2::new(0.5, 0.5));
            assert_eq!(before.color, after.color, "mode {mode:?}");
        }
    }

    #[test]
    fn out_of_square_queries_clamp() {
        let m = bent_mesh();
        let e = SurfaceEvaluator::new(&m, ColorInterpolation::Bilinear);
        assert_eq!(e.evaluate(-0.01, 1.01), e.evaluate(0.0, 1.0));
    }
}
