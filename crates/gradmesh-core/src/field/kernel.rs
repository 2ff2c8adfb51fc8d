use crate::coords::Vec2;
use crate::mesh::Anchor;
use crate::paint::Rgb;

/// Inverse-square-distance blend: weight `1 / (d² + epsilon)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InverseDistance {
    /// Softening term keeping the weight finite at an anchor.
    pub epsilon: f32,
}

impl Default for InverseDistance {
    fn default() -> Self {
        Self { epsilon: 1e-5 }
    }
}

impl InverseDistance {
    pub fn blend(&self, anchors: &[Anchor], q: Vec2) -> Rgb {
        weighted(anchors, q, |d2| 1.0 / (d2 + self.epsilon))
    }
}

/// Gaussian falloff: weight `exp(-d² / (2·bandwidth²))`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gaussian {
    pub bandwidth: f32,
}

impl Default for Gaussian {
    fn default() -> Self {
        Self { bandwidth: 0.25 }
    }
}

impl Gaussian {
    /// Falls back to the nearest anchor when `bandwidth <= 0` or every
    /// weight underflows.
    pub fn blend(&self, anchors: &[Anchor], q: Vec2) -> Rgb {
        if self.bandwidth.is_nan() || self.bandwidth <= 0.0 {
            return nearest(anchors, q);
        }
        let inv_two_sigma2 = 1.0 / (2.0 * self.bandwidth * self.bandwidth);
        weighted(anchors, q, |d2| (-d2 * inv_two_sigma2).exp())
    }
}

/// Voronoi-like blend: weight `1 / d^power`, with an exact hand-off to an
/// anchor's own color inside `epsilon` of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NearestDominant {
    pub power: f32,
    pub epsilon: f32,
}

impl Default for NearestDominant {
    fn default() -> Self {
        Self { power: 8.0, epsilon: 1e-3 }
    }
}

impl NearestDominant {
    pub fn blend(&self, anchors: &[Anchor], q: Vec2) -> Rgb {
        // Lowest index wins when several anchors are inside the radius.
        if let Some(hit) = anchors.iter().find(|a| a.position.distance(q) < self.epsilon) {
            return hit.color;
        }
        weighted(anchors, q, |d2| 1.0 / d2.sqrt().powf(self.power))
    }
}

/// Normalised weighted sum of anchor colors.
///
/// When the weights do not normalise (zero, overflowing or NaN total) the
/// nearest anchor's color is returned instead.
fn weighted(anchors: &[Anchor], q: Vec2, weight: impl Fn(f32) -> f32) -> Rgb {
    let mut sum = Rgb::black();
    let mut total = 0.0f32;
    for a in anchors {
        let w = weight(a.position.distance_squared(q));
        sum = sum + a.color * w;
        total += w;
    }
    if total > 0.0 && total.is_finite() {
        let out = sum * (1.0 / total);
        if out.is_finite() {
            return out;
        }
    }
    nearest(anchors, q)
}

fn nearest(anchors: &[Anchor], q: Vec2) -> Rgb {
    let mut best = Rgb::black();
    let mut best_d2 = f32::INFINITY;
    for a in anchors {
        let d2 = a.position.distance_squared(q);
        if d2 < best_d2 {
            best_d2 = d2;
            best = a.color;
        }
    }
    best
}
