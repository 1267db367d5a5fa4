// SPDX short identifier: Unlicense

#![allow(unused, unused_mut)]

use rand::{thread_rng, Rng};

use borromean_rct::{
    common::*,
    pedersen::H2,
    rangeproof::{
        BorromeanSignature,
        RangeSignature,
        BIT_RANGE,
        MAX_VALUE
    }
};

#[test]
fn borromean_range_test() {
    let mut amounts: Vec<u64> = vec!(0, 1, (1 << 63) - 1, 1 << 32, 123456789, MAX_VALUE);
    for _ in 0..4 {
        amounts.push(thread_rng().gen::<u64>());
    }

    for amount in amounts {
        //prove
        let proven = RangeSignature::prove(amount);
        assert_eq!(proven.commitment, Commitment::commit(amount, proven.mask));

        let mut deserialized = proven.signature.clone();
        #[cfg(feature = "to_bytes")]
        {
            //serialize
            let serialized = proven.signature.to_bytes().unwrap();
            deserialized = RangeSignature::from_bytes(&serialized).unwrap();
        }

        //verify
        assert!(deserialized.verify(&proven.commitment));

        //wrong commitment
        assert!(!deserialized.verify(&Commitment::commit(amount, random_scalar())));
    }
}

#[test]
fn corrupted_range_test() {
    let proven = RangeSignature::prove(thread_rng().gen::<u64>());
    let index = thread_rng().gen::<usize>() % BIT_RANGE;

    //one bit commitment swapped for another
    let mut corrupted = proven.signature.clone();
    corrupted.ci[index] = Commitment(random_point());
    assert!(!corrupted.verify(&proven.commitment));

    //bit commitments moved, but still summing to the commitment
    let mut shifted = proven.signature.clone();
    let offset = random_point();
    shifted.ci[index].0 += offset;
    shifted.ci[(index + 1) % BIT_RANGE].0 -= offset;
    assert!(!shifted.verify(&proven.commitment));

    //truncated
    let mut truncated = proven.signature.clone();
    truncated.ci.pop();
    assert!(!truncated.verify(&proven.commitment));
    let mut truncated = proven.signature;
    truncated.bsig.s1.pop();
    assert!(!truncated.verify(&proven.commitment));
}

#[test]
fn borromean_keys_test() {
    //the rangeproof's key sets, built by hand: a commitment to a bit-decomposed amount
    let amount = thread_rng().gen::<u64>();
    let mut secrets = [Scalar::zero(); BIT_RANGE];
    let mut keys = [[G_POINT; BIT_RANGE]; 2];
    let mut indices = [false; BIT_RANGE];
    for i in 0..BIT_RANGE {
        indices[i] = (amount >> i) & 1 == 1;
        secrets[i] = random_scalar();
        let ci = &secrets[i] * G + if indices[i] { H2[i] } else { RistrettoPoint::identity() };
        keys[0][i] = ci;
        keys[1][i] = ci - H2[i];
    }

    let sig = BorromeanSignature::sign(&secrets, &keys, &indices);
    assert!(sig.verify(&keys[0], &keys[1]));

    //swapped branches
    assert!(!sig.verify(&keys[1], &keys[0]));

    //a flipped bit means a secret for the wrong key
    let mut flipped = indices;
    let bit = thread_rng().gen::<usize>() % BIT_RANGE;
    flipped[bit] = !flipped[bit];
    let sig = BorromeanSignature::sign(&secrets, &keys, &flipped);
    assert!(!sig.verify(&keys[0], &keys[1]));
}
