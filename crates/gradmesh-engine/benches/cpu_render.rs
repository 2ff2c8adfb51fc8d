use criterion::{criterion_group, criterion_main, Criterion};
use gradmesh_core::{ColorInterpolation, FieldStrategy, InverseDistance, MeshState};
use gradmesh_engine::{CpuRenderer, RenderConfig};
use std::hint::black_box;

fn bench_cpu_render(c: &mut Criterion) {
    let mesh = MeshState::initialize(5, 5).unwrap();
    let renderer = CpuRenderer::new();

    let mut group = c.benchmark_group("cpu_render");
    for strategy in [
        FieldStrategy::Patch(ColorInterpolation::Bilinear),
        FieldStrategy::Patch(ColorInterpolation::Bicubic),
        FieldStrategy::InverseDistance(InverseDistance::default()),
    ] {
        let config = RenderConfig::new(256, 256, strategy);
        group.bench_function(strategy.name(), |b| {
            b.iter(|| black_box(renderer.render(black_box(&mesh), &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cpu_render);
criterion_main!(benches);
