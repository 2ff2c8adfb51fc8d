//! Property tests over mesh mutations and evaluation.

use gradmesh_core::{
    locate, ColorField, ColorInterpolation, Direction, FieldStrategy, Gaussian, InverseDistance,
    MeshState, NearestDominant, SurfaceEvaluator, Vec2,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Top),
        Just(Direction::Right),
        Just(Direction::Bottom),
        Just(Direction::Left),
    ]
}

fn strategy() -> impl Strategy<Value = FieldStrategy> {
    prop_oneof![
        Just(FieldStrategy::Patch(ColorInterpolation::Bilinear)),
        Just(FieldStrategy::Patch(ColorInterpolation::Bicubic)),
        Just(FieldStrategy::InverseDistance(InverseDistance::default())),
        Just(FieldStrategy::Gaussian(Gaussian::default())),
        Just(FieldStrategy::NearestDominant(NearestDominant::default())),
    ]
}

proptest! {
    #[test]
    fn move_point_clamps_and_isolates(
        w in 1usize..6,
        h in 1usize..6,
        pick in 0usize..36,
        x in -3.0f32..3.0,
        y in -3.0f32..3.0,
    ) {
        let mesh = MeshState::initialize(w, h).unwrap();
        let index = pick % mesh.len();
        let moved = mesh.move_point(index, x, y).unwrap();
        prop_assert_eq!(moved.anchor(index).unwrap().position, Vec2::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)));
        for i in (0..mesh.len()).filter(|&i| i != index) {
            prop_assert_eq!(moved.anchor(i), mesh.anchor(i));
        }
        prop_assert_eq!(moved.handles(), mesh.handles());
    }

    #[test]
    fn update_handle_touches_one_direction(
        pick in 0usize..9,
        dir in direction(),
        x in -2.0f32..2.0,
        y in -2.0f32..2.0,
    ) {
        let mesh = MeshState::initialize(3, 3).unwrap();
        let edited = mesh.update_handle(pick, dir, x, y).unwrap();
        let before = mesh.handle_set(pick).unwrap();
        let after = edited.handle_set(pick).unwrap();
        prop_assert_eq!(after.get(dir), Vec2::new(x.clamp(-0.5, 0.5), y.clamp(-0.5, 0.5)));
        for other in Direction::ALL.into_iter().filter(|&d| d != dir) {
            prop_assert_eq!(after.get(other).x.to_bits(), before.get(other).x.to_bits());
            prop_assert_eq!(after.get(other).y.to_bits(), before.get(other).y.to_bits());
        }
    }

    #[test]
    fn out_of_range_edits_change_nothing(w in 1usize..5, h in 1usize..5, extra in 0usize..10) {
        let mesh = MeshState::initialize(w, h).unwrap();
        let index = mesh.len() + extra;
        prop_assert!(mesh.move_point(index, 0.5, 0.5).is_err());
        prop_assert!(mesh.update_handle(index, Direction::Top, 0.0, 0.0).is_err());
        prop_assert_eq!(mesh, MeshState::initialize(w, h).unwrap());
    }

    #[test]
    fn resize_keeps_counts_and_bounds(w in 1usize..12, h in 1usize..12) {
        let mesh = MeshState::default().resize(w, h).unwrap();
        prop_assert_eq!(mesh.len(), w * h);
        prop_assert_eq!(mesh.handles().len(), w * h);
        for a in mesh.anchors() {
            prop_assert!((0.0..=1.0).contains(&a.position.x));
            prop_assert!((0.0..=1.0).contains(&a.position.y));
        }
    }

    #[test]
    fn evaluation_is_total_and_deterministic(
        w in 1usize..5,
        h in 1usize..5,
        u in -0.1f32..1.1,
        v in -0.1f32..1.1,
        s in strategy(),
    ) {
        let mesh = MeshState::initialize(w, h).unwrap();
        let field = s.bind(&mesh);
        let a = field.sample(u, v);
        let b = field.sample(u, v);
        prop_assert!(a.position.is_finite());
        prop_assert!(a.color.is_finite());
        prop_assert_eq!(a.color.r.to_bits(), b.color.r.to_bits());
        prop_assert_eq!(a.color.g.to_bits(), b.color.g.to_bits());
        prop_assert_eq!(a.color.b.to_bits(), b.color.b.to_bits());
        prop_assert_eq!(field.evaluate(u, v), a.color);
    }

    #[test]
    fn shared_vertical_edges_match_after_edits(
        moves in proptest::collection::vec((0usize..16, 0.0f32..1.0, 0.0f32..1.0), 0..6),
        handles in proptest::collection::vec((0usize..16, direction(), -0.5f32..0.5, -0.5f32..0.5), 0..6),
        row in 0usize..3,
        col in 0usize..2,
        t in 0.0f32..=1.0,
    ) {
        let mut mesh = MeshState::initialize(4, 4).unwrap();
        for (i, x, y) in moves {
            mesh = mesh.move_point(i, x, y).unwrap();
        }
        for (i, d, x, y) in handles {
            mesh = mesh.update_handle(i, d, x, y).unwrap();
        }
        for mode in [ColorInterpolation::Bilinear, ColorInterpolation::Bicubic] {
            let e = SurfaceEvaluator::new(&mesh, mode);
            let left = e.evaluate_cell(col, row, Vec2::new(1.0, t));
            let right = e.evaluate_cell(col + 1, row, Vec2::new(0.0, t));
            prop_assert_eq!(left, right);
        }
    }
}

proptest! {
    #[test]
    fn far_edge_continues_the_last_cell(
        w in 2usize..7,
        h in 2usize..7,
        v in 0.0f32..=1.0,
        mode in prop_oneof![Just(ColorInterpolation::Bilinear), Just(ColorInterpolation::Bicubic)],
    ) {
        let edge = locate(w, h, 1.0, v);
        prop_assert_eq!(edge.col, w - 2);
        prop_assert_eq!(edge.local.x, 1.0);

        let mesh = MeshState::initialize(w, h).unwrap();
        let e = SurfaceEvaluator::new(&mesh, mode);
        let at = e.evaluate(1.0, v);
        let near = e.evaluate(1.0 - 1e-4, v);
        prop_assert!((at.position.x - near.position.x).abs() < 1e-2);
        prop_assert!((at.position.y - near.position.y).abs() < 1e-2);
        prop_assert!((at.color.r - near.color.r).abs() < 1e-2);
        prop_assert!((at.color.g - near.color.g).abs() < 1e-2);
        prop_assert!((at.color.b - near.color.b).abs() < 1e-2);
    }
}
