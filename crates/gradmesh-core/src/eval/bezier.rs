//! Cubic and bicubic Bézier evaluation.

use crate::coords::Vec2;
use crate::patch::Patch;

/// Bernstein weights of a cubic at `t`.
///
/// At `t = 0` and `t = 1` the weights are exactly `[1, 0, 0, 0]` and
/// `[0, 0, 0, 1]`, so curves pass through their end points bit-exactly.
#[inline]
pub fn cubic_weights(t: f32) -> [f32; 4] {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;
    [mt2 * mt, 3.0 * mt2 * t, 3.0 * mt * t2, t2 * t]
}

/// `(1-t)³·p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³·p3`
#[inline]
pub fn cubic(p: [Vec2; 4], t: f32) -> Vec2 {
    let [w0, w1, w2, w3] = cubic_weights(t);
    p[0] * w0 + p[1] * w1 + p[2] * w2 + p[3] * w3
}

/// Evaluates the patch lattice: each control row at `local.x`, then the
/// four results at `local.y`.
pub fn bicubic(patch: &Patch, local: Vec2) -> Vec2 {
    let column = [0, 1, 2, 3].map(|r| cubic(patch.row(r), local.x));
    cubic(column, local.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        for t in [0.0, 0.1, 0.5, 0.77, 1.0] {
            let s: f32 = cubic_weights(t).iter().sum();
            assert!((s - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cubic_hits_end_points_exactly() {
        let p = [
            Vec2::new(0.1, 0.2),
            Vec2::new(0.3, 0.9),
            Vec2::new(0.6, -0.4),
            Vec2::new(0.9, 0.7),
        ];
        assert_eq!(cubic(p, 0.0), p[0]);
        assert_eq!(cubic(p, 1.0), p[3]);
    }

    #[test]
    fn straight_controls_stay_on_the_line() {
        let p = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0].map(|x| Vec2::new(x, 0.0));
        let mid = cubic(p, 0.5);
        assert!((mid.x - 0.5).abs() < 1e-6);
        assert_eq!(mid.y, 0.0);
    }
}
