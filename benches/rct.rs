// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use std::time::Duration;

const RING_SIZE: usize = 11;
const INPUTS: [usize; 3] = [1, 2, 4];

use borromean_rct::{
    common::*,
    address::generate_key_image,
    device::SoftwareDevice,
    rct::{
        gen_rct,
        ver_rct,
        ver_rct_simple
    }
};

fn rct_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("RingCT");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));
    let device = SoftwareDevice::new();

    for x in INPUTS {
        let in_amounts: Vec<u64> = vec!(1000; x);
        let out_amounts: Vec<u64> = vec!(1000 * x as u64 - 10);
        let in_sk: Vec<SecretCommitment> = (0..x)
            .map(|_| SecretCommitment::new(random_scalar(), random_scalar()))
            .collect();
        let key_images: Vec<RistrettoPoint> = in_sk.iter().map(|sk| generate_key_image(&sk.x)).collect();
        let mix_ring: Vec<Vec<RingMember>> = in_sk.iter().zip(&in_amounts)
            .map(|(sk, amount)| {
                let mut ring: Vec<RingMember> = (0..RING_SIZE)
                    .map(|_| RingMember::new(random_point(), Commitment(random_point())))
                    .collect();
                ring[0] = sk.to_ring_member(*amount);
                ring
            })
            .collect();
        let destinations = vec!(random_point());
        let amount_keys = vec!(random_scalar());
        let indices = vec!(0; x);

        let generate = || gen_rct(
            &[0u8; 32], &in_sk, &key_images, &destinations, &in_amounts, &out_amounts,
            &mix_ring, &amount_keys, &indices, 10, &device
        ).unwrap();

        //generate
        group.bench_function(BenchmarkId::new("generate", format!("Inputs: {x}")), |b| b.iter(generate));

        //verify, semantics and MLSAGs
        let rv = generate();
        group.bench_function(BenchmarkId::new("verify", format!("Inputs: {x}")), |b| b.iter(|| {
            if x == 1 {
                ver_rct(&rv, true, &mix_ring[0], &key_images[0]).unwrap()
                    && ver_rct(&rv, false, &mix_ring[0], &key_images[0]).unwrap()
            } else {
                ver_rct_simple(&rv, true, &mix_ring, &key_images).unwrap()
                    && ver_rct_simple(&rv, false, &mix_ring, &key_images).unwrap()
            }
        }));
    }
}

criterion_group!(benches, rct_benchmark);
criterion_main!(benches);
