// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use std::time::Duration;

const RING_SIZES: [usize; 5] = [2, 4, 11, 16, 64];

use borromean_rct::{
    common::*,
    hashes::h_key_image_point,
    device::SoftwareDevice,
    signature::{
        MlsagSignature,
        KeyColumn
    }
};

fn mlsag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("MLSAG");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));
    let device = SoftwareDevice::new();
    let message = [0u8; 32];

    for x in RING_SIZES {
        let secrets = [random_scalar(), random_scalar()];
        let mut pk: Vec<KeyColumn> = (0..x).map(|_| [random_point(), random_point()]).collect();
        pk[0] = [&secrets[0] * G, &secrets[1] * G];
        let key_image = secrets[0] * h_key_image_point(&pk[0][0]);

        //sign
        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &pk,
            |b, pk| b.iter(|| {
                MlsagSignature::sign(&message, pk, &secrets, &key_image, 0, &device)
            }));

        //verify
        let sig = MlsagSignature::sign(&message, &pk, &secrets, &key_image, 0, &device).unwrap();
        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &pk,
            |b, pk| b.iter(|| {
                sig.verify(&message, pk, &key_image)
            }));
    }
}

criterion_group!(benches, mlsag_benchmark);
criterion_main!(benches);
