//! Cell Locator: global `(u, v)` to `(cell, local)`.
//!
//! Cells partition the unit square uniformly by grid index, whatever the
//! actual anchor positions are. Distortion from moved anchors is expressed
//! by the patch geometry, not by re-locating cells. Anchors dragged across a
//! neighbour's nominal cell produce folded patches; the locator does not try
//! to resolve that.

use crate::coords::{clamp_scalar, Vec2};
use crate::mesh::MeshState;

/// A located query: cell index plus the cell-local parameter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    /// Local parameter in `[0, 1]²`.
    pub local: Vec2,
}

/// Maps `(u, v)` onto the cell grid of a `width × height` anchor mesh.
///
/// - `u`, `v` are clamped into `[0, 1]` first (NaN counts as 0), so
///   samplers probing slightly outside the square still land in a cell.
/// - `col = floor(u · (width - 1))`, clamped to the last cell.
/// - `local.x = u · (width - 1) - col`. This is `fract` everywhere except
///   `u = 1`, which maps to the right edge of the last cell (`local.x = 1`)
///   rather than wrapping to its left edge.
/// - A single-anchor axis has no span: its cell index and local parameter
///   are both 0.
pub fn locate(width: usize, height: usize, u: f32, v: f32) -> Cell {
    let (col, lu) = locate_axis(width, u);
    let (row, lv) = locate_axis(height, v);
    Cell { col, row, local: Vec2::new(lu, lv) }
}

/// [`locate`] against a mesh's own dimensions.
#[inline]
pub fn locate_in(mesh: &MeshState, u: f32, v: f32) -> Cell {
    locate(mesh.width(), mesh.height(), u, v)
}

fn locate_axis(anchors: usize, t: f32) -> (usize, f32) {
    if anchors < 2 {
        return (0, 0.0);
    }
    let cells = anchors - 1;
    let scaled = clamp_scalar(t, 0.0, 1.0) * cells as f32;
    let index = (scaled.floor() as usize).min(cells - 1);
    let local = clamp_scalar(scaled - index as f32, 0.0, 1.0);
    (index, local)
}
