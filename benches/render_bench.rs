use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fractpunk::RenderConfig;

fn bench_render(c: &mut Criterion) {
    let config = RenderConfig {
        width: 256,
        height: 256,
        ..Default::default()
    };

    c.bench_function("render_256x256", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            fractpunk::fractal::render(&config, &mut rng)
        })
    });

    let deterministic = RenderConfig {
        width: 256,
        height: 256,
        perturbation: 0.0,
        ..Default::default()
    };

    c.bench_function("render_256x256_no_perturbation", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            fractpunk::fractal::render(&deterministic, &mut rng)
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
