use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulseline_core::{
    encoder::{encode, LineCode},
    scrambler::{scramble, ZeroSubstitution},
    types::Symbol,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Zero-heavy symbol stream so substitutions actually fire
fn sparse_symbols(len: usize) -> Vec<Symbol> {
    let mut rng = StdRng::seed_from_u64(0xC0DE);
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.1) {
                Symbol::One
            } else {
                Symbol::Zero
            }
        })
        .collect()
}

fn bench_scramble(c: &mut Criterion) {
    let mut group = c.benchmark_group("scramble");

    for size in [256, 1024, 4096, 16384] {
        let symbols = sparse_symbols(size);
        let template = encode(LineCode::Ami, &symbols).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        for code in [ZeroSubstitution::B8zs, ZeroSubstitution::Hdb3] {
            group.bench_with_input(
                BenchmarkId::new(code.name(), size),
                &symbols,
                |b, symbols| {
                    b.iter_batched(
                        || template.clone(),
                        |mut train| {
                            scramble(code, black_box(symbols), &mut train).unwrap();
                            train
                        },
                        criterion::BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_scramble);
criterion_main!(benches);
