// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_stepper::counter::BoundedCounter;
use understory_stepper::range::LinkedRangeCounter;
use understory_stepper::text::{filter_text, resolve_text};
use understory_stepper::types::{Bounds, Side};

fn gen_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Label{i:05}")).collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_text");
    for &n in &[12usize, 256, 4096] {
        let labels = gen_labels(n);
        let bounds = Bounds::new(0, i32::try_from(n).unwrap() - 1).unwrap();
        let last = labels.last().unwrap().to_lowercase();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("last_label_n{}", n), |b| {
            b.iter(|| black_box(resolve_text(black_box(&last), bounds, Some(&labels[..]))));
        });
        group.bench_function(format!("numeric_fallback_n{}", n), |b| {
            b.iter(|| black_box(resolve_text(black_box("42"), bounds, Some(&labels[..]))));
        });
        group.bench_function(format!("filter_miss_n{}", n), |b| {
            b.iter(|| black_box(filter_text(black_box("zz"), bounds, Some(&labels[..]))));
        });
    }
    group.finish();
}

fn bench_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepping");
    group.throughput(Throughput::Elements(10_000));
    for circular in [false, true] {
        group.bench_function(format!("counter_circular_{}", circular), |b| {
            b.iter_batched(
                || {
                    let mut counter = BoundedCounter::new();
                    counter.set_range(0, 59).unwrap();
                    counter.set_circular(circular);
                    counter
                },
                |mut counter| {
                    for i in 0..10_000 {
                        black_box(counter.increment(if i % 3 == 0 { -7 } else { 5 }));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("linked_range", |b| {
        b.iter_batched(
            || {
                let mut range = LinkedRangeCounter::new();
                range.set_range(0, 100).unwrap();
                range.set_change_listener(|side, prev, next| {
                    black_box((side, prev, next));
                });
                range
            },
            |mut range| {
                for i in 0..10_000 {
                    let side = if i % 2 == 0 { Side::Min } else { Side::Max };
                    black_box(range.increment(side, if i % 5 == 0 { -9 } else { 4 }));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_stepping);
criterion_main!(benches);
