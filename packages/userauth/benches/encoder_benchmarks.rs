//! Throughput of every encoder over short and long secrets

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cryypt_userauth::{EncoderKind, registry};

/// Benchmark all eight schemes with different secret sizes
fn benchmark_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_throughput");

    // Typical password lengths up to a 4KB secret
    let sizes = [8, 64, 4096];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));
        let secret = vec![b'a'; *size];

        for kind in EncoderKind::ALL {
            let encoder = registry::encoder_for(kind, "salt");
            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &secret, |b, secret| {
                b.iter(|| std::hint::black_box(encoder.encode(secret, None)));
            });
        }
    }
    group.finish();
}

/// Benchmark registry lookup and construction
fn benchmark_construction(c: &mut Criterion) {
    c.bench_function("new_encoder_ssha256", |b| {
        b.iter(|| {
            let encoder = registry::new_encoder("ssha256", "salt").expect("registered name");
            std::hint::black_box(encoder);
        });
    });
}

criterion_group!(benches, benchmark_encoders, benchmark_construction);
criterion_main!(benches);
