//! Benchmarks for `PairMap` point lookups, projections, and bulk fills.
//!
//! Run with: cargo bench -p roost-pairmap -- pairmap

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use roost_pairmap::PairMap;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Dense `side x side` grid with `row * side + col` as the value.
fn grid(side: u64) -> PairMap<u64, u64, u64> {
    let mut map = PairMap::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            map.insert(row, col, row * side + col).unwrap();
        }
    }
    map
}

// ---------------------------------------------------------------------------
// 1. Point lookup, mixed hits and misses
// ---------------------------------------------------------------------------

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairmap/lookup");

    for side in [10u64, 32, 100] {
        let entries = side * side;
        group.throughput(Throughput::Elements(entries));

        let map = grid(side);

        // Pseudo-random probe pattern (deterministic via simple LCG); row
        // range is doubled so roughly half the probes miss.
        let probes: Vec<(u64, u64)> = (0..entries)
            .map(|i| {
                let x = i.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((x >> 3) % (side * 2), (x >> 17) % side)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(entries), &(), |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for (row, col) in &probes {
                    if let Some(v) = map.get(row, col) {
                        sum = sum.wrapping_add(*v);
                    }
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. Strict inserts (build a grid from scratch)
// ---------------------------------------------------------------------------

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairmap/insert");

    for side in [10u64, 32, 100] {
        let entries = side * side;
        group.throughput(Throughput::Elements(entries));

        group.bench_with_input(BenchmarkId::from_parameter(entries), &(), |b, _| {
            b.iter(|| {
                let mut map = PairMap::with_capacity(entries as usize);
                for row in 0..side {
                    for col in 0..side {
                        map.insert(row, col, row * side + col).unwrap();
                    }
                }
                black_box(map.len())
            })
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. Row and column projections (whole-table scans)
// ---------------------------------------------------------------------------

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairmap/projection");

    for side in [10u64, 32, 100] {
        // A projection scans every entry regardless of how many match.
        group.throughput(Throughput::Elements(side * side));

        let map = grid(side);
        let pick = side / 2;

        group.bench_with_input(BenchmarkId::new("row", side), &(), |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for (_, v) in map.row(&pick) {
                    sum = sum.wrapping_add(*v);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("column", side), &(), |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for (_, v) in map.column(&pick) {
                    sum = sum.wrapping_add(*v);
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. Cross-product fill (stage + commit)
// ---------------------------------------------------------------------------

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairmap/fill");

    for side in [10u64, 32, 100] {
        let entries = side * side;
        group.throughput(Throughput::Elements(entries));

        group.bench_with_input(BenchmarkId::from_parameter(entries), &(), |b, _| {
            b.iter(|| {
                let mut map: PairMap<u64, u64, u64> = PairMap::new();
                map.fill(0..side, 0..side, |r, c| r * side + c).unwrap();
                black_box(map.len())
            })
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 5. String pair keys (clone-probe cost on owned keys)
// ---------------------------------------------------------------------------

fn bench_string_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairmap/string_keys");

    for side in [10usize, 32] {
        let entries = (side * side) as u64;
        group.throughput(Throughput::Elements(entries));

        let rows: Vec<String> = (0..side).map(|i| format!("row-{i}")).collect();
        let cols: Vec<String> = (0..side).map(|i| format!("col-{i}")).collect();

        let mut map: PairMap<String, String, u32> = PairMap::with_capacity(side * side);
        for (i, row) in rows.iter().enumerate() {
            for (j, col) in cols.iter().enumerate() {
                map.insert(row.clone(), col.clone(), (i * side + j) as u32)
                    .unwrap();
            }
        }

        group.bench_with_input(BenchmarkId::from_parameter(entries), &(), |b, _| {
            b.iter(|| {
                let mut sum = 0u32;
                for row in &rows {
                    for col in &cols {
                        if let Some(v) = map.get(row, col) {
                            sum = sum.wrapping_add(*v);
                        }
                    }
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_lookup,
    bench_insert,
    bench_projection,
    bench_fill,
    bench_string_pairs,
);
criterion_main!(benches);
