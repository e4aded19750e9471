// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sls_core::{Point, PointStore};
use sls_costs::CostLinear;
use sls_solver::{OptimalPartitioner, PartitionerConfig};

fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

/// Piecewise-linear signal with a slope flip every 50 points plus noise.
fn generate_store(n: usize) -> PointStore {
    let mut state = 0x5eed_cafe_f00d_0001_u64 ^ n as u64;
    let points: Vec<Point> = (0..n)
        .map(|idx| {
            let x = idx as f64;
            let slope = if (idx / 50) % 2 == 0 { 2.0 } else { -2.0 };
            let noise = (lcg_next(&mut state) % 2001) as f64 / 1000.0 - 1.0;
            Point::new(x, slope * (x % 50.0) + noise)
        })
        .collect();
    PointStore::from_points(points).expect("benchmark store should build")
}

fn benchmark_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver_dp");
    group.sample_size(10);

    for n in [250usize, 500, 1000, 2000] {
        let store = generate_store(n);
        let partitioner = OptimalPartitioner::new(CostLinear, PartitionerConfig { penalty: 10.0 })
            .expect("benchmark config should be valid");

        group.bench_with_input(BenchmarkId::new("solve", n), &store, |b, store| {
            b.iter(|| {
                partitioner
                    .solve(black_box(store))
                    .expect("benchmark solve should succeed")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_solver);
criterion_main!(benches);
