use passgen::{
    password_generator::{password_generator_with_rng, CharacterPolicy},
    strength::evaluate,
};
use rand::{rngs::StdRng, SeedableRng};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark_generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("generate 32 chars basic", |b| {
        b.iter(|| password_generator_with_rng(&mut rng, 32, CharacterPolicy::Basic))
    });
    c.bench_function("generate 100 chars strong", |b| {
        b.iter(|| password_generator_with_rng(&mut rng, 100, CharacterPolicy::Strong))
    });
}

fn criterion_benchmark_evaluate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let password = password_generator_with_rng(&mut rng, 32, CharacterPolicy::Strong).unwrap();

    c.bench_function("evaluate 32 chars", |b| b.iter(|| evaluate(password.as_str())));
}

criterion_group!(
    benches,
    criterion_benchmark_generate,
    criterion_benchmark_evaluate
);
criterion_main!(benches);
