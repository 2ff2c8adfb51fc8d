//! Color fields: the swappable "color at `(u, v)`" strategies.
//!
//! A [`FieldStrategy`] is chosen once at render setup and bound to a mesh
//! snapshot with [`FieldStrategy::bind`]. The per-cell Bézier evaluator and
//! the global point-blend kernels are variants of one enum, not separate
//! renderer types.

mod kernel;

pub use kernel::{Gaussian, InverseDistance, NearestDominant};

use crate::coords::{clamp_scalar, Vec2};
use crate::eval::{ColorInterpolation, Sample, SurfaceEvaluator};
use crate::mesh::MeshState;
use crate::paint::Rgb;

/// Anything that yields a color per query point.
pub trait ColorField {
    fn evaluate(&self, u: f32, v: f32) -> Rgb;
}

/// Color-field algorithm selection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FieldStrategy {
    /// Per-cell bicubic Bézier patches.
    Patch(ColorInterpolation),
    /// Global inverse-square-distance blend of every anchor.
    InverseDistance(InverseDistance),
    /// Global Gaussian-falloff blend of every anchor.
    Gaussian(Gaussian),
    /// Global high-power inverse-distance blend with an exact hand-off near anchors.
    NearestDominant(NearestDominant),
}

impl Default for FieldStrategy {
    fn default() -> Self {
        FieldStrategy::Patch(ColorInterpolation::Bilinear)
    }
}

impl FieldStrategy {
    /// Stable numeric tag, shared with GPU parameter blocks.
    #[inline]
    pub const fn tag(&self) -> u32 {
        match self {
            FieldStrategy::Patch(_) => 0,
            FieldStrategy::InverseDistance(_) => 1,
            FieldStrategy::Gaussian(_) => 2,
            FieldStrategy::NearestDominant(_) => 3,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            FieldStrategy::Patch(ColorInterpolation::Bilinear) => "patch-bilinear",
            FieldStrategy::Patch(ColorInterpolation::Bicubic) => "patch-bicubic",
            FieldStrategy::InverseDistance(_) => "inverse-distance",
            FieldStrategy::Gaussian(_) => "gaussian",
            FieldStrategy::NearestDominant(_) => "nearest-dominant",
        }
    }

    /// Binds the strategy to a mesh snapshot.
    #[inline]
    pub fn bind<'m>(self, mesh: &'m MeshState) -> MeshField<'m> {
        MeshField { mesh, strategy: self }
    }
}

/// A strategy bound to one mesh snapshot.
#[derive(Debug, Copy, Clone)]
pub struct MeshField<'m> {
    mesh: &'m MeshState,
    strategy: FieldStrategy,
}

impl<'m> MeshField<'m> {
    #[inline]
    pub fn strategy(&self) -> FieldStrategy {
        self.strategy
    }

    /// Position and color at `(u, v)`.
    ///
    /// Global kernels do not deform space: their position is the clamped
    /// query point itself.
    pub fn sample(&self, u: f32, v: f32) -> Sample {
        let anchors = self.mesh.anchors();
        let q = Vec2::new(clamp_scalar(u, 0.0, 1.0), clamp_scalar(v, 0.0, 1.0));
        let color = match self.strategy {
            FieldStrategy::Patch(mode) => return SurfaceEvaluator::new(self.mesh, mode).evaluate(u, v),
            FieldStrategy::InverseDistance(k) => k.blend(anchors, q),
            FieldStrategy::Gaussian(k) => k.blend(anchors, q),
            FieldStrategy::NearestDominant(k) => k.blend(anchors, q),
        };
        Sample { position: q, color }
    }
}

impl ColorField for MeshField<'_> {
    #[inline]
    fn evaluate(&self, u: f32, v: f32) -> Rgb {
        self.sample(u, v).color
    }
}
