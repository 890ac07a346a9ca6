use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sph_designer::prelude::*;

const SPACINGS: [f64; 4] = [0.05, 0.02, 0.01, 0.005];
const DISK_COUNTS: [usize; 4] = [100, 500, 2000, 10000];

fn raster_fluid_fill_benches(c: &mut Criterion) {
    let rect = Rect::from_corners(DVec2::new(0.1, 0.1), DVec2::new(0.9, 0.9));

    let mut group = c.benchmark_group("raster/fluid_fill");
    for &dx in &SPACINGS {
        let fill = FluidFill::new(rect, dx);
        group.bench_with_input(BenchmarkId::from_parameter(dx), &dx, |b, _| {
            b.iter(|| {
                let pts = fill.generate().unwrap();
                black_box(pts.len());
            });
        });
    }
    group.finish();
}

fn raster_basin_benches(c: &mut Criterion) {
    let rect = Rect::from_corners(DVec2::new(0.2, 0.2), DVec2::new(0.8, 0.8));

    let mut group = c.benchmark_group("raster/basin_walls");
    for &dx in &SPACINGS {
        let walls = BasinWalls::new(rect, dx, 0.03);
        group.bench_with_input(BenchmarkId::from_parameter(dx), &dx, |b, _| {
            b.iter(|| {
                let pts = walls.generate().unwrap();
                black_box(pts.len());
            });
        });
    }
    group.finish();
}

fn raster_polygon_benches(c: &mut Criterion) {
    // A 12-gon keeps the point-in-polygon test non-trivial.
    let points: Vec<DVec2> = (0..12)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / 12.0;
            DVec2::new(0.5 + 0.4 * a.cos(), 0.5 + 0.4 * a.sin())
        })
        .collect();
    let polygon = Polygon::new(points);

    let mut group = c.benchmark_group("raster/polygon_fill");
    for &dx in &SPACINGS {
        let fill = PolygonFill::new(polygon.clone(), dx);
        group.bench_with_input(BenchmarkId::from_parameter(dx), &dx, |b, _| {
            b.iter(|| {
                let pts = fill.generate().unwrap();
                black_box(pts.len());
            });
        });
    }
    group.finish();
}

fn raster_disk_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster/sunflower_disk");
    for &n in &DISK_COUNTS {
        let disk = SunflowerDisk::new(DVec2::new(0.5, 0.5), 0.2, n);
        let mut rng = StdRng::seed_from_u64(0x5EED ^ n as u64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let pts = disk.generate(&mut rng);
                black_box(pts.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    raster_fluid_fill_benches,
    raster_basin_benches,
    raster_polygon_benches,
    raster_disk_benches
);
criterion_main!(benches);
