//! Benches for evaluation and failure explanation.
//!
//! Implemented benches:
//!
//! - Evaluation of a sum of products over `TERMS` random numbers
//! - Evaluation of deeply nested parentheses
//! - Explaining failures, including the search for a suggested fix

use criterion::{criterion_group, criterion_main, BatchSize, Bencher, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

use arithmetic_explain::{evaluate, tokenize, Environment};

const SEED: u64 = 123;
const TERMS: u64 = 50;
const NESTING: usize = 1_000;

fn random_sum(rng: &mut impl Rng) -> String {
    let terms: Vec<_> = (0..TERMS)
        .map(|_| {
            let lhs = rng.gen_range(0.5_f64..1.5);
            let rhs = rng.gen_range(0.5_f64..1.5);
            format!("{lhs:.3} * {rhs:.3}")
        })
        .collect();
    terms.join(" + ")
}

fn bench_tokenize(bencher: &mut Bencher<'_>) {
    let mut rng = StdRng::seed_from_u64(SEED);
    bencher.iter_batched(
        || random_sum(&mut rng),
        |input| tokenize(&input).len(),
        BatchSize::SmallInput,
    );
}

fn bench_sum(bencher: &mut Bencher<'_>) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let env = Environment::<f64>::new();
    bencher.iter_batched(
        || random_sum(&mut rng),
        |input| evaluate(&input, &env).unwrap(),
        BatchSize::SmallInput,
    );
}

fn bench_nesting(bencher: &mut Bencher<'_>) {
    let input = format!("{}x{}", "(1 + ".repeat(NESTING), ")".repeat(NESTING));
    let env = Environment::new().with_var("x", 1.0_f64);
    bencher.iter(|| evaluate(&input, &env).unwrap());
}

fn bench_evaluation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("evaluate");
    group
        .throughput(Throughput::Elements(TERMS))
        .bench_function("tokenize", bench_tokenize)
        .bench_function("sum", bench_sum);
    group
        .throughput(Throughput::Elements(NESTING as u64))
        .bench_function("nesting", bench_nesting);
    group.finish();
}

fn bench_explanation(criterion: &mut Criterion) {
    const INPUTS: &[(&str, &str)] = &[
        ("missing_paren", "2 * (x + 1"),
        ("implicit_mul", "3 4 + 2x"),
        ("dangling_op", "x * 2 +"),
        ("typo", "2 * xx + 1"),
        ("uncorrectable", "3 + )"),
    ];

    let env = Environment::new().with_var("x", 1.0_f64);
    let mut group = criterion.benchmark_group("explain");
    for &(name, input) in INPUTS {
        group.bench_function(name, |bencher| {
            bencher.iter(|| {
                let failure = evaluate(input, &env).unwrap_err();
                let diagnosis = failure.explain(&env);
                (diagnosis.location(), diagnosis.suggested_fix().is_some())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluation, bench_explanation);
criterion_main!(benches);
