//! Patch Builder: per-cell bicubic Bézier control lattice and corner colors.
//!
//! Lattice layout (row-major, `P[row * 4 + col]`):
//!
//! ```text
//!  P0  P1  P2  P3      P0 = TL anchor          P3 = TR anchor
//!  P4  P5  P6  P7      P12 = BL anchor         P15 = BR anchor
//!  P8  P9  P10 P11
//!  P12 P13 P14 P15
//! ```
//!
//! Edge points are an anchor plus the handle facing along that edge:
//!
//! | point | anchor | handle |
//! |-------|--------|--------|
//! | P1    | TL     | right  |
//! | P2    | TR     | left   |
//! | P4    | TL     | bottom |
//! | P8    | BL     | top    |
//! | P7    | TR     | bottom |
//! | P11   | BR     | top    |
//! | P13   | BL     | right  |
//! | P14   | BR     | left   |
//!
//! Every edge therefore depends only on its two end anchors and their
//! handles, so neighbouring cells agree exactly along a shared edge.
//!
//! Interior points are placed at one and two thirds between the row's
//! left and right edge points (`P5`, `P6` between `P4` and `P7`; `P9`, `P10`
//! between `P8` and `P11`). There is no twist control.

use crate::coords::Vec2;
use crate::mesh::{Direction, MeshState};
use crate::paint::Rgb;

/// Grid coordinates of one cell's corner anchors.
///
/// On a degenerate axis the far corner coincides with the near one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CellCorners {
    pub top_left: usize,
    pub top_right: usize,
    pub bottom_left: usize,
    pub bottom_right: usize,
}

impl CellCorners {
    /// Anchor indices of cell `(col, row)`; out-of-grid cells are clamped.
    pub fn of(mesh: &MeshState, col: usize, row: usize) -> Self {
        let col = col.min(mesh.width().saturating_sub(2));
        let row = row.min(mesh.height().saturating_sub(2));
        Self {
            top_left: mesh.index(col, row),
            top_right: mesh.index(col + 1, row),
            bottom_left: mesh.index(col, row + 1),
            bottom_right: mesh.index(col + 1, row + 1),
        }
    }

    /// Indices in position-corner order: TL, TR, BL, BR.
    #[inline]
    pub fn to_array(self) -> [usize; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }
}

/// Geometry and colors of one cell, re-derived from a mesh on demand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Patch {
    pub corners: CellCorners,
    /// Bicubic Bézier control lattice, row-major.
    pub points: [Vec2; 16],
    /// Corner colors in TL, TR, BL, BR order.
    pub colors: [Rgb; 4],
}

impl Patch {
    /// Builds the patch covering cell `(col, row)`.
    pub fn build(mesh: &MeshState, col: usize, row: usize) -> Self {
        let corners = CellCorners::of(mesh, col, row);
        let anchors = mesh.anchors();
        let handles = mesh.handles();

        let pos = |i: usize| anchors[i].position;
        let edge = |i: usize, d: Direction| anchors[i].position + handles[i].get(d);

        let CellCorners { top_left: tl, top_right: tr, bottom_left: bl, bottom_right: br } = corners;

        let mut p = [Vec2::zero(); 16];

        p[0] = pos(tl);
        p[3] = pos(tr);
        p[12] = pos(bl);
        p[15] = pos(br);

        p[1] = edge(tl, Direction::Right);
        p[2] = edge(tr, Direction::Left);
        p[4] = edge(tl, Direction::Bottom);
        p[8] = edge(bl, Direction::Top);
        p[7] = edge(tr, Direction::Bottom);
        p[11] = edge(br, Direction::Top);
        p[13] = edge(bl, Direction::Right);
        p[14] = edge(br, Direction::Left);

        p[5] = p[4].lerp(p[7], ONE_THIRD);
        p[6] = p[4].lerp(p[7], TWO_THIRDS);
        p[9] = p[8].lerp(p[11], ONE_THIRD);
        p[10] = p[8].lerp(p[11], TWO_THIRDS);

        Self {
            corners,
            points: p,
            colors: corners.to_array().map(|i| anchors[i].color),
        }
    }

    /// Control row `r` (0..4) of the lattice.
    #[inline]
    pub fn row(&self, r: usize) -> [Vec2; 4] {
        let base = r * 4;
        [self.points[base], self.points[base + 1], self.points[base + 2], self.points[base + 3]]
    }
}

pub const ONE_THIRD: f32 = 1.0 / 3.0;
pub const TWO_THIRDS: f32 = 2.0 / 3.0;
