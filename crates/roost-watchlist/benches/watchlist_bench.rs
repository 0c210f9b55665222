//! Benchmarks for `WatchList` mutation paths against a bare `Vec` baseline.
//!
//! Run with: cargo bench -p roost-watchlist -- watchlist

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

use roost_watchlist::WatchList;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Empty list with `watchers` insertion watchers feeding one shared sink.
fn watched_list(watchers: usize) -> (WatchList<u64>, Rc<Cell<u64>>) {
    let list = WatchList::new();
    let sink = Rc::new(Cell::new(0u64));
    for _ in 0..watchers {
        let sink_clone = Rc::clone(&sink);
        list.on_inserted(move |_, element, _| {
            sink_clone.set(sink_clone.get().wrapping_add(*element));
        })
        .detach();
    }
    (list, sink)
}

// ---------------------------------------------------------------------------
// 1. Push: report overhead per insertion
// ---------------------------------------------------------------------------

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("watchlist/push");
    let count = 1_000u64;
    group.throughput(Throughput::Elements(count));

    group.bench_function("vec_baseline", |b| {
        b.iter(|| {
            let mut vec = Vec::with_capacity(count as usize);
            for i in 0..count {
                vec.push(i);
            }
            black_box(vec.len())
        })
    });

    for watchers in [0usize, 1, 4, 16] {
        group.bench_with_input(
            BenchmarkId::new("watchers", watchers),
            &watchers,
            |b, &watchers| {
                b.iter(|| {
                    let (mut list, sink) = watched_list(watchers);
                    for i in 0..count {
                        list.push(i);
                    }
                    black_box((list.len(), sink.get()))
                })
            },
        );
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. Set: report overhead per in-place update
// ---------------------------------------------------------------------------

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("watchlist/set");
    let count = 1_000u64;
    group.throughput(Throughput::Elements(count));

    group.bench_function("vec_baseline", |b| {
        let mut vec: Vec<u64> = (0..count).collect();
        b.iter(|| {
            for i in 0..count {
                vec[i as usize] = i.wrapping_mul(3);
            }
            black_box(vec[0])
        })
    });

    for watchers in [0usize, 1, 4, 16] {
        group.bench_with_input(
            BenchmarkId::new("watchers", watchers),
            &watchers,
            |b, &watchers| {
                let mut list = WatchList::from((0..count).collect::<Vec<_>>());
                let sink = Rc::new(Cell::new(0u64));
                for _ in 0..watchers {
                    let sink_clone = Rc::clone(&sink);
                    list.on_changed(move |_, new, old, _| {
                        sink_clone.set(sink_clone.get().wrapping_add(*new).wrapping_add(*old));
                    })
                    .detach();
                }
                b.iter(|| {
                    for i in 0..count {
                        let _ = list.set(i as usize, i.wrapping_mul(3));
                    }
                    black_box(sink.get())
                })
            },
        );
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. Clear: per-element front drain
// ---------------------------------------------------------------------------

fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("watchlist/clear");

    for count in [100u64, 1_000] {
        group.throughput(Throughput::Elements(count));

        // Same algorithm on a bare Vec: repeated head removal, so the
        // comparison isolates report overhead rather than the shift cost.
        group.bench_with_input(BenchmarkId::new("vec_front_drain", count), &(), |b, _| {
            b.iter(|| {
                let mut vec: Vec<u64> = (0..count).collect();
                while !vec.is_empty() {
                    black_box(vec.remove(0));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("watched", count), &(), |b, _| {
            b.iter(|| {
                let mut list = WatchList::from((0..count).collect::<Vec<_>>());
                let sink = Rc::new(Cell::new(0u64));
                let sink_clone = Rc::clone(&sink);
                list.on_removed(move |_, element, _| {
                    sink_clone.set(sink_clone.get().wrapping_add(*element));
                })
                .detach();
                list.clear();
                black_box(sink.get())
            })
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. Scan: reads stay plain slice iteration
// ---------------------------------------------------------------------------

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("watchlist/scan");
    let count = 10_000u64;
    group.throughput(Throughput::Elements(count));

    let vec: Vec<u64> = (0..count).collect();
    let list = WatchList::from(vec.clone());

    group.bench_function("vec", |b| {
        b.iter(|| black_box(vec.iter().sum::<u64>()))
    });

    group.bench_function("watchlist", |b| {
        b.iter(|| black_box(list.iter().sum::<u64>()))
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_set, bench_clear, bench_scan);
criterion_main!(benches);
