//! Benchmarks for overlay geometry generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use revenant_debug_overlay::geometry;
use revenant_debug_overlay::CollisionEntity;

fn room_entities(count: usize) -> Vec<CollisionEntity> {
    (0..count)
        .map(|i| CollisionEntity {
            // Cycle through the flat shape codes, including a couple of
            // skipped ones, to exercise the whole dispatch table.
            shape: (i % 9) as u32,
            slope_type: 0,
            x: (i % 32) as f32,
            z: (i / 32) as f32,
            width: 2.0,
            density: 3.0,
            slope_height: 0.0,
        })
        .collect()
}

fn bench_collision_vertices(c: &mut Criterion) {
    let entities = room_entities(512);
    c.bench_function("collision_vertices_512", |b| {
        b.iter(|| geometry::collision_vertices(black_box(&entities)))
    });
}

fn bench_circle_heavy_room(c: &mut Criterion) {
    let entities: Vec<CollisionEntity> = (0..256)
        .map(|i| CollisionEntity {
            shape: 6,
            slope_type: 0,
            x: i as f32,
            z: 0.0,
            width: 4.0,
            density: 0.0,
            slope_height: 0.0,
        })
        .collect();
    c.bench_function("collision_vertices_256_circles", |b| {
        b.iter(|| geometry::collision_vertices(black_box(&entities)))
    });
}

criterion_group!(
    benches,
    bench_collision_vertices,
    bench_circle_heavy_room
);
criterion_main!(benches);
