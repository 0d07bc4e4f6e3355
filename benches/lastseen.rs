use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lastseen::{LastSeenSketch, PrimeSieve};
use rand::{thread_rng, Rng};

fn bench_last_seen_update(c: &mut Criterion) {
    c.bench_function("Test LastSeenSketch update", move |b| {
        let cases = 1_000_000;
        b.iter_batched(
            || {
                let mut rng = thread_rng();
                let keys: Vec<u64> =
                    black_box((0..cases).map(|_| rng.gen::<u64>() % 32768).collect());
                let sk = LastSeenSketch::<u64>::new(10_000).unwrap();
                (sk, keys)
            },
            |(mut sk, keys)| {
                keys.iter().enumerate().for_each(|(tick, &k)| {
                    let _ = sk.update(k, tick as u64);
                });
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_last_seen_lookup_and_update(c: &mut Criterion) {
    c.bench_function("Test LastSeenSketch lookup and update", move |b| {
        let cases = 1_000_000;
        b.iter_batched(
            || {
                let mut rng = thread_rng();
                let keys: Vec<u64> =
                    black_box((0..cases).map(|_| rng.gen::<u64>() % 32768).collect());
                let sk = LastSeenSketch::<u64>::new(10_000).unwrap();
                (sk, keys)
            },
            |(mut sk, keys)| {
                keys.iter().enumerate().for_each(|(tick, &k)| {
                    let _ = sk.lookup(k);
                    let _ = sk.lookup_and_update(k, tick as u64);
                });
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_last_seen_count_distinct(c: &mut Criterion) {
    c.bench_function("Test LastSeenSketch count distinct", move |b| {
        let mut rng = thread_rng();
        let mut sk = LastSeenSketch::<u64>::new(10_000).unwrap();
        (0..10_000u64).for_each(|tick| {
            sk.update(rng.gen(), tick / 100);
        });
        b.iter(|| black_box(sk.count_distinct(black_box(50))))
    });
}

fn bench_primes_from(c: &mut Criterion) {
    c.bench_function("Test PrimeSieve primes from", move |b| {
        let sieve = PrimeSieve::new();
        b.iter(|| {
            (0..u16::MAX).step_by(97).for_each(|floor| {
                black_box(sieve.primes_from(floor, 7));
            })
        })
    });
}

criterion_group!(
    lastseen,
    bench_last_seen_update,
    bench_last_seen_lookup_and_update,
    bench_last_seen_count_distinct,
    bench_primes_from
);

criterion_main!(lastseen);
