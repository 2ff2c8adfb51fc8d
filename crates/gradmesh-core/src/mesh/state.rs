use crate::coords::Vec2;
use crate::paint::{default_color, Rgb};

use super::{Anchor, Direction, HandleSet, MeshEdit, MeshError};

/// Largest absolute value a handle component may take.
pub const HANDLE_LIMIT: f32 = 0.5;

/// Handle length given to every anchor of a fresh mesh.
pub const DEFAULT_HANDLE_LENGTH: f32 = 0.1;

/// Grid axes that collapse to a single anchor column or row.
///
/// A collapsed axis has no span to divide by; locators and evaluators pin
/// its local parameter to 0 instead of producing NaN.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DegenerateAxes {
    pub u: bool,
    pub v: bool,
}

impl DegenerateAxes {
    #[inline]
    pub fn any(self) -> bool {
        self.u || self.v
    }
}

/// Rectangular grid of anchors with per-anchor tangent handles.
///
/// Invariants (upheld by every constructor and mutation):
/// - `width >= 1`, `height >= 1`
/// - `anchors.len() == handles.len() == width * height`, row-major
/// - every anchor position is in `[0, 1]²`
/// - every handle component is in `[-HANDLE_LIMIT, HANDLE_LIMIT]`
///
/// Mutations return a new state; `self` is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshState {
    width: usize,
    height: usize,
    anchors: Vec<Anchor>,
    handles: Vec<HandleSet>,
}

impl MeshState {
    /// Lays anchors on a uniform grid with palette colors and default handles.
    ///
    /// A single-column (or single-row) grid places its anchors at `x = 0`
    /// (or `y = 0`).
    pub fn initialize(width: usize, height: usize) -> Result<Self, MeshError> {
        let invalid = || reject(MeshError::InvalidDimension { width, height });
        let count = match width.checked_mul(height) {
            Some(n) if width >= 1 && height >= 1 => n,
            _ => return Err(invalid()),
        };
        let (anchors, handles) = allocate(count).ok_or_else(invalid)?;

        let state = Self::uniform(width, height, anchors, handles);
        let axes = state.degenerate_axes();
        if axes.any() {
            log::debug!("mesh {width}x{height} has degenerate axes {axes:?}; local parameters pinned to 0");
        }
        Ok(state)
    }

    /// Fills the uniform layout into storage reserved for `width * height` anchors.
    fn uniform(width: usize, height: usize, mut anchors: Vec<Anchor>, mut handles: Vec<HandleSet>) -> Self {
        let count = width * height;
        anchors.extend((0..count).map(|index| {
            let col = index % width;
            let row = index / width;
            Anchor::new(
                Vec2::new(grid_coord(col, width), grid_coord(row, height)),
                default_color(index),
            )
        }));
        handles.resize(count, HandleSet::uniform(DEFAULT_HANDLE_LENGTH));

        Self { width, height, anchors, handles }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total anchor count (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Always false; a valid mesh holds at least one anchor.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    #[inline]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    #[inline]
    pub fn handles(&self) -> &[HandleSet] {
        &self.handles
    }

    #[inline]
    pub fn anchor(&self, index: usize) -> Option<&Anchor> {
        self.anchors.get(index)
    }

    #[inline]
    pub fn handle_set(&self, index: usize) -> Option<&HandleSet> {
        self.handles.get(index)
    }

    /// Row-major index of `(col, row)`. Coordinates are clamped to the grid.
    #[inline]
    pub fn index(&self, col: usize, row: usize) -> usize {
        row.min(self.height - 1) * self.width + col.min(self.width - 1)
    }

    #[inline]
    pub fn degenerate_axes(&self) -> DegenerateAxes {
        DegenerateAxes { u: self.width == 1, v: self.height == 1 }
    }

    // ── mutations ─────────────────────────────────────────────────────────

    /// Re-initialises the whole mesh at the new size, discarding prior edits.
    pub fn resize(&self, width: usize, height: usize) -> Result<Self, MeshError> {
        Self::initialize(width, height)
    }

    /// Moves anchor `index` to `(x, y)`, clamped into `[0, 1]²`.
    pub fn move_point(&self, index: usize, x: f32, y: f32) -> Result<Self, MeshError> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.anchors[index].position = Vec2::new(x, y).clamp(0.0, 1.0);
        Ok(next)
    }

    /// Replaces the color of anchor `index` verbatim.
    pub fn set_color(&self, index: usize, color: Rgb) -> Result<Self, MeshError> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.anchors[index].color = color;
        Ok(next)
    }

    /// Replaces one directional handle of anchor `index`, clamped into
    /// `[-HANDLE_LIMIT, HANDLE_LIMIT]²`. The other three handles are untouched.
    pub fn update_handle(
        &self,
        index: usize,
        direction: Direction,
        x: f32,
        y: f32,
    ) -> Result<Self, MeshError> {
        self.check_index(index)?;
        let offset = Vec2::new(x, y).clamp(-HANDLE_LIMIT, HANDLE_LIMIT);
        let mut next = self.clone();
        next.handles[index] = next.handles[index].with(direction, offset);
        Ok(next)
    }

    /// Applies a recorded edit.
    pub fn apply(&self, edit: &MeshEdit) -> Result<Self, MeshError> {
        match *edit {
            MeshEdit::Resize { width, height } => self.resize(width, height),
            MeshEdit::MovePoint { index, x, y } => self.move_point(index, x, y),
            MeshEdit::SetColor { index, color } => self.set_color(index, color),
            MeshEdit::UpdateHandle { index, direction, x, y } => {
                self.update_handle(index, direction, x, y)
            }
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), MeshError> {
        if index < self.anchors.len() {
            Ok(())
        } else {
            Err(reject(MeshError::IndexOutOfRange { index, count: self.anchors.len() }))
        }
    }
}

impl Default for MeshState {
    /// 3×3 uniform mesh.
    fn default() -> Self {
        Self::uniform(3, 3, Vec::with_capacity(9), Vec::with_capacity(9))
    }
}

/// Reserves anchor and handle storage, or `None` when `count` cannot be
/// allocated. Oversized grids become an error instead of an allocation panic.
fn allocate(count: usize) -> Option<(Vec<Anchor>, Vec<HandleSet>)> {
    let mut anchors = Vec::new();
    anchors.try_reserve_exact(count).ok()?;
    let mut handles = Vec::new();
    handles.try_reserve_exact(count).ok()?;
    Some((anchors, handles))
}

/// Uniform grid coordinate of line `i` out of `n`; a lone line sits at 0.
#[inline]
fn grid_coord(i: usize, n: usize) -> f32 {
    if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 }
}

#[inline]
fn reject(err: MeshError) -> MeshError {
    log::warn!("mesh edit rejected: {err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(w: usize, h: usize) -> MeshState {
        MeshState::initialize(w, h).unwrap()
    }

    // ── initialize ────────────────────────────────────────────────────────

    #[test]
    fn initialize_lays_uniform_grid() {
        let m = mesh(3, 3);
        let expected = [
            (0.0, 0.0), (0.5, 0.0), (1.0, 0.0),
            (0.0, 0.5), (0.5, 0.5), (1.0, 0.5),
            (0.0, 1.0), (0.5, 1.0), (1.0, 1.0),
        ];
        assert_eq!(m.len(), 9);
        for (a, (x, y)) in m.anchors().iter().zip(expected) {
            assert_eq!(a.position, Vec2::new(x, y));
        }
    }

    #[test]
    fn initialize_gives_default_handles() {
        let m = mesh(2, 4);
        assert_eq!(m.handles().len(), 8);
        for h in m.handles() {
            assert_eq!(h.top, Vec2::new(0.0, -0.1));
            assert_eq!(h.right, Vec2::new(0.1, 0.0));
            assert_eq!(h.bottom, Vec2::new(0.0, 0.1));
            assert_eq!(h.left, Vec2::new(-0.1, 0.0));
        }
    }

    #[test]
    fn initialize_single_column_is_finite() {
        let m = mesh(1, 3);
        assert!(m.anchors().iter().all(|a| a.position.is_finite()));
        assert_eq!(m.anchor(2).unwrap().position, Vec2::new(0.0, 1.0));
        assert_eq!(m.degenerate_axes(), DegenerateAxes { u: true, v: false });
    }

    #[test]
    fn initialize_rejects_zero_dimension() {
        assert_eq!(
            MeshState::initialize(0, 3),
            Err(MeshError::InvalidDimension { width: 0, height: 3 })
        );
        assert!(MeshState::initialize(3, 0).is_err());
    }

    #[test]
    fn initialize_rejects_overflowing_count() {
        assert!(MeshState::initialize(usize::MAX, 2).is_err());
    }

    #[test]
    fn initialize_rejects_unallocatable_count() {
        assert_eq!(
            MeshState::initialize(usize::MAX / 2, 1),
            Err(MeshError::InvalidDimension { width: usize::MAX / 2, height: 1 })
        );
        let m = mesh(2, 2);
        assert!(m.resize(usize::MAX / 4, 2).is_err());
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn default_matches_initialize() {
        assert_eq!(MeshState::default(), mesh(3, 3));
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_discards_edits() {
        let m = mesh(3, 3).move_point(4, 0.1, 0.1).unwrap();
        let r = m.resize(3, 3).unwrap();
        assert_eq!(r, mesh(3, 3));
    }

    #[test]
    fn resize_invalid_leaves_state() {
        let m = mesh(2, 2);
        let before = m.clone();
        assert!(m.resize(0, 0).is_err());
        assert_eq!(m, before);
    }

    // ── move_point ────────────────────────────────────────────────────────

    #[test]
    fn move_point_clamps() {
        let m = mesh(3, 3).move_point(4, 1.5, -0.25).unwrap();
        assert_eq!(m.anchor(4).unwrap().position, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn move_point_nan_lands_in_bounds() {
        let m = mesh(2, 2).move_point(0, f32::NAN, 0.3).unwrap();
        assert_eq!(m.anchor(0).unwrap().position, Vec2::new(0.0, 0.3));
    }

    #[test]
    fn move_point_out_of_range() {
        assert_eq!(
            mesh(2, 2).move_point(4, 0.0, 0.0),
            Err(MeshError::IndexOutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn move_point_returns_new_value() {
        let m = mesh(2, 2);
        let moved = m.move_point(1, 0.3, 0.3).unwrap();
        assert_eq!(m.anchor(1).unwrap().position, Vec2::new(1.0, 0.0));
        assert_eq!(moved.anchor(1).unwrap().position, Vec2::new(0.3, 0.3));
    }

    // ── set_color ─────────────────────────────────────────────────────────

    #[test]
    fn set_color_stores_verbatim() {
        let odd = Rgb::new(1.5, -0.2, 0.3);
        let m = mesh(2, 2).set_color(3, odd).unwrap();
        assert_eq!(m.anchor(3).unwrap().color, odd);
    }

    #[test]
    fn set_color_out_of_range() {
        assert!(mesh(2, 2).set_color(9, Rgb::white()).is_err());
    }

    // ── update_handle ─────────────────────────────────────────────────────

    #[test]
    fn update_handle_clamps_and_isolates() {
        let m = mesh(3, 3);
        let before = *m.handle_set(4).unwrap();
        let edited = m.update_handle(4, Direction::Left, -0.9, 0.25).unwrap();
        let after = *edited.handle_set(4).unwrap();
        assert_eq!(after.left, Vec2::new(-0.5, 0.25));
        assert_eq!(after.top, before.top);
        assert_eq!(after.right, before.right);
        assert_eq!(after.bottom, before.bottom);
    }

    #[test]
    fn update_handle_out_of_range() {
        assert!(mesh(1, 1).update_handle(1, Direction::Top, 0.0, 0.0).is_err());
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_dispatches_each_edit() {
        let m = mesh(2, 2);
        let e = MeshEdit::UpdateHandle { index: 0, direction: Direction::Right, x: 0.2, y: 0.0 };
        assert_eq!(m.apply(&e), m.update_handle(0, Direction::Right, 0.2, 0.0));
        let e = MeshEdit::Resize { width: 4, height: 1 };
        assert_eq!(m.apply(&e).unwrap().len(), 4);
    }
}
