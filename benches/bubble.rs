use bubble_sort::bubble_sort;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_bubble_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_sort");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);

    for size in [10usize, 100, 1000] {
        let random: Vec<u64> = (0..size).map(|_| rng.random()).collect();
        let sorted: Vec<u64> = (0..size as u64).collect();
        let reversed: Vec<u64> = (0..size as u64).rev().collect();

        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                bubble_sort(black_box(&mut data));
            })
        });
        // Best case: the early exit finishes after a single pass.
        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                bubble_sort(black_box(&mut data));
            })
        });
        group.bench_with_input(BenchmarkId::new("reversed", size), &reversed, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                bubble_sort(black_box(&mut data));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bubble_sort);
criterion_main!(benches);
