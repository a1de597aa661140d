use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulseline_core::{
    encoder::{encode, LineCode},
    modulator::{delta_mod_encode, pcm_encode},
    types::Symbol,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_symbols(len: usize) -> Vec<Symbol> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.5) {
                Symbol::One
            } else {
                Symbol::Zero
            }
        })
        .collect()
}

fn bench_line_codes(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_encode");

    for size in [256, 1024, 4096, 16384] {
        let symbols = random_symbols(size);

        group.throughput(Throughput::Elements(size as u64));
        for code in [
            LineCode::NrzL,
            LineCode::NrzI,
            LineCode::Manchester,
            LineCode::DiffManchester,
            LineCode::Ami,
        ] {
            group.bench_with_input(
                BenchmarkId::new(code.name(), size),
                &symbols,
                |b, symbols| {
                    b.iter(|| encode(code, black_box(symbols)).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_modulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("modulate");

    for size in [256, 1024, 4096] {
        let mut rng = StdRng::seed_from_u64(0xA5A5);
        let samples: Vec<f64> = (0..size).map(|_| rng.gen_range(-10.0..10.0)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("pcm_8bit", size), &samples, |b, s| {
            b.iter(|| pcm_encode(black_box(s), 8).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("delta_mod", size), &samples, |b, s| {
            b.iter(|| delta_mod_encode(black_box(s)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_line_codes, bench_modulation);
criterion_main!(benches);
