// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion
};
use std::time::Duration;

use borromean_rct::rangeproof::RangeSignature;

fn borromean_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Borromean");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    //prove
    group.bench_function("prove", |b| b.iter(|| {
        RangeSignature::prove(black_box(1234567890))
    }));

    //verify
    let proven = RangeSignature::prove(1234567890);
    group.bench_function("verify", |b| b.iter(|| {
        proven.signature.verify(black_box(&proven.commitment))
    }));
}

criterion_group!(benches, borromean_benchmark);
criterion_main!(benches);
