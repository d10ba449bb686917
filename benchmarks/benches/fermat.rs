use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fermat_core::{factorize, generate_close_semiprime};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_close_semiprimes(c: &mut Criterion) {
    let mut group = c.benchmark_group("close_semiprimes");
    let mut rng = StdRng::seed_from_u64(98765);

    for factor_bits in [16u32, 24, 32, 48, 64] {
        let target = generate_close_semiprime(factor_bits, &mut rng);
        group.bench_with_input(
            BenchmarkId::from_parameter(factor_bits),
            &target.n,
            |b, n| {
                b.iter(|| factorize(n));
            },
        );
    }

    group.finish();
}

fn bench_worst_case_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("worst_case_primes");
    group.sample_size(10);

    for p in [101u64, 9973, 104729] {
        let n = BigUint::from(p);
        group.bench_with_input(BenchmarkId::from_parameter(p), &n, |b, n| {
            b.iter(|| factorize(n));
        });
    }

    group.finish();
}

fn bench_canonical_66_bit(c: &mut Criterion) {
    let inputs = benchmarks::canonical_inputs();
    let n = inputs.last().unwrap().clone();

    c.bench_function("canonical_66_bit_semiprime", |b| {
        b.iter(|| factorize(&n));
    });
}

criterion_group!(
    benches,
    bench_close_semiprimes,
    bench_worst_case_primes,
    bench_canonical_66_bit
);
criterion_main!(benches);
