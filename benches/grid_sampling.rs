use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use em_complex::fields::sample_log_radius;
use em_complex::grid::Grid2D;
use em_complex::mapping::{map_grid, Square};

fn bench_grid_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_sampling");
    for res in [10_usize, 30, 100] {
        let grid = Grid2D::reference(res).expect("resolution in bounds");
        group.bench_with_input(BenchmarkId::new("log_radius", res), &grid, |b, grid| {
            b.iter(|| sample_log_radius(grid))
        });
        group.bench_with_input(BenchmarkId::new("square_map", res), &grid, |b, grid| {
            b.iter(|| map_grid(grid, &Square))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_sampling);
criterion_main!(benches);
