//! Criterion benchmark for the evaluation hot path.
//!
//! An outer optimizer calls `evaluate` once per candidate per generation, so
//! throughput on realistic unit counts is what matters. Uses a synthetic
//! square grid to keep the benchmark free of data files.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geo::{LineString, MultiPolygon, Polygon};

use beatline::{Partition, Unit, UnitId, evaluate};

fn grid(side: usize, districts: u32) -> (Vec<Unit>, Partition) {
    let mut units = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let (x, y) = (col as f64, row as f64);
            let geometry = MultiPolygon(vec![Polygon::new(
                LineString::from(vec![
                    (x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0), (x, y),
                ]),
                vec![],
            )]);

            units.push(Unit::new(
                UnitId::new(format!("{row}-{col}")),
                geometry,
                ((row * 31 + col * 17) % 23) as u64,
                100 + ((row * 13 + col * 7) % 50) as u64,
            ));
        }
    }

    // Vertical bands of districts.
    let labels = (0..side * side)
        .map(|i| ((i % side) as u32 * districts) / side as u32)
        .collect::<Vec<_>>();
    let partition = Partition::from_labels(&units, &labels);

    (units, partition)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for side in [8, 32, 64] {
        let (units, partition) = grid(side, 4);

        group.bench_with_input(BenchmarkId::from_parameter(side * side), &side, |b, _| {
            b.iter(|| evaluate(black_box(&units), black_box(&partition)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
