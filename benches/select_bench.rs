//! Selection benchmark: quickselect vs `select_nth_unstable`, quicksort vs `sort_unstable`.
//!
//! Inputs are shuffled `u64`s from a fixed seed, plus an already sorted input to exercise the
//! median-of-three pivot on the classic worst case for endpoint pivots.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use std::time::Duration;

use ordstat::sort::quick_sort;
use ordstat::{find_median, select_nth};

// How long to record measurements for.
const MEASURE_DURATION_SECS: u64 = 10;
const SEED: u64 = 0x0dd5_7a75;
const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn shuffled(size: usize, rng: &mut ChaCha8Rng) -> Vec<u64> {
    let mut data: Vec<u64> = (0..size as u64).collect();
    data.shuffle(rng);
    data
}

fn benchmark_select(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    let mut group = c.benchmark_group("select_median");
    group.measurement_time(Duration::from_secs(MEASURE_DURATION_SECS));

    for size in SIZES {
        let random = shuffled(size, &mut rng);
        let sorted: Vec<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));

        for (shape, input) in [("random", &random), ("sorted", &sorted)] {
            group.bench_with_input(
                BenchmarkId::new(format!("std_select_nth_unstable/{shape}"), size),
                input,
                |b, input| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |data| {
                            let mid = data.len() / 2;
                            black_box(*data.select_nth_unstable(mid).1);
                        },
                        criterion::BatchSize::LargeInput,
                    );
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("select_nth/{shape}"), size),
                input,
                |b, input| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |data| {
                            let mid = data.len() / 2;
                            black_box(select_nth(data, mid).ok().copied());
                        },
                        criterion::BatchSize::LargeInput,
                    );
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("find_median/{shape}"), size),
                input,
                |b, input| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |data| black_box(find_median(data).ok().copied()),
                        criterion::BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn benchmark_sort(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    let mut group = c.benchmark_group("sort");
    group.measurement_time(Duration::from_secs(MEASURE_DURATION_SECS));

    for size in SIZES {
        let random = shuffled(size, &mut rng);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("std_sort_unstable", size), &random, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |data| data.sort_unstable(),
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("quick_sort", size), &random, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |data| quick_sort(data),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_select, benchmark_sort);
criterion_main!(benches);
