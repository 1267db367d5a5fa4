// SPDX short identifier: Unlicense

#![allow(unused)]

use rand::{thread_rng, Rng};

use borromean_rct::{
    common::*,
    address::{
        AccountKeys,
        KeyImageCache,
        generate_key_image,
        generate_key_image_helper
    },
    device::{Device, DeviceMode, SoftwareDevice},
    ecdh::{EcdhTuple, encode_ecdh},
    rct::{gen_rct, ver_rct, ver_rct_simple, decode_rct}
};

#[test]
fn key_image_helper_test() {
    let device = SoftwareDevice::new();
    let keys = AccountKeys::generate();
    let tx_secret = random_scalar();
    let tx_pub = (&tx_secret * G).compress();

    for out_index in 0..4 {
        let (dest, amount_key) = keys.to_public().derive_output(&tx_secret, out_index);
        let mask = random_scalar();
        let encrypted_mask = encode_ecdh(&EcdhTuple::new(mask, 0), &amount_key).mask;

        let result = generate_key_image_helper(&keys, &tx_pub, out_index, Some(&encrypted_mask), &device).unwrap();
        assert_eq!(result.in_ephemeral.public, dest);
        assert_eq!(&result.in_ephemeral.secret * G, dest);
        assert_eq!(result.in_ephemeral.mask, mask);
        assert_eq!(result.key_image, generate_key_image(&result.in_ephemeral.secret));

        //an output with the identity mask
        let result = generate_key_image_helper(&keys, &tx_pub, out_index, None, &device).unwrap();
        assert_eq!(result.in_ephemeral.mask, Scalar::one());
    }

    //a different wallet derives a different key
    let other = AccountKeys::generate();
    let (dest, _) = keys.to_public().derive_output(&tx_secret, 0);
    let result = generate_key_image_helper(&other, &tx_pub, 0, None, &device).unwrap();
    assert_ne!(result.in_ephemeral.public, dest);
}

#[test]
fn key_image_helper_malformed_test() {
    let device = SoftwareDevice::new();
    let keys = AccountKeys::generate();

    //not a valid encoding
    let garbage = CompressedRistretto([0xff; 32]);
    assert!(matches!(
        generate_key_image_helper(&keys, &garbage, 0, None, &device),
        Err(KeyError::KeyImageDerivationFailed(_))
    ));

    //the identity, so the derivation is too
    let identity = RistrettoPoint::identity().compress();
    assert!(matches!(
        generate_key_image_helper(&keys, &identity, 0, None, &device),
        Err(KeyError::KeyImageDerivationFailed(_))
    ));
}

#[test]
fn key_image_cache_test() {
    let device = SoftwareDevice::new();
    let keys = AccountKeys::generate();
    let other = AccountKeys::generate();
    let tx_pub = random_point().compress();

    let mut cache = KeyImageCache::new();
    assert_eq!(cache.get(&keys.to_public(), &tx_pub, 1), None);

    let key_image = cache.get_or_derive(&keys, &tx_pub, 1, &device).unwrap();
    assert_eq!(key_image, generate_key_image_helper(&keys, &tx_pub, 1, None, &device).unwrap().key_image);
    assert_eq!(cache.get(&keys.to_public(), &tx_pub, 1), Some(key_image));
    assert_eq!(cache.get_or_derive(&keys, &tx_pub, 1, &device).unwrap(), key_image);

    //keyed by wallet and output
    assert_eq!(cache.get(&other.to_public(), &tx_pub, 1), None);
    assert_eq!(cache.get(&keys.to_public(), &tx_pub, 0), None);
    assert_ne!(cache.get_or_derive(&other, &tx_pub, 1, &device).unwrap(), key_image);

    cache.clear_wallet(&keys.to_public());
    assert_eq!(cache.get(&keys.to_public(), &tx_pub, 1), None);
    assert!(cache.get(&other.to_public(), &tx_pub, 1).is_some());

    //failures are not cached
    let garbage = CompressedRistretto([0xff; 32]);
    assert!(cache.get_or_derive(&keys, &garbage, 0, &device).is_err());
    assert_eq!(cache.get(&keys.to_public(), &garbage, 0), None);
}

#[test]
fn receive_and_spend_test() {
    let mut device = SoftwareDevice::new();
    let receiver = AccountKeys::generate();
    let amounts = [1500u64, 2500];

    //fund the receiver from a throwaway input
    device.set_mode(DeviceMode::TransactionCreateReal).unwrap();
    let tx_secret = device.open_tx().unwrap();
    let tx_pub = (&tx_secret * G).compress();

    let funding = SecretCommitment::new(random_scalar(), random_scalar());
    let mut destinations = Vec::new();
    let mut amount_keys = Vec::new();
    for i in 0..amounts.len() {
        let (dest, amount_key) = receiver.to_public().derive_output(&tx_secret, i as u64);
        destinations.push(dest);
        amount_keys.push(amount_key);
    }
    let funding_ring = vec!(funding.to_ring_member(4000), RingMember::new(random_point(), Commitment(random_point())));
    let rv = gen_rct(
        &[1u8; 32], &[funding.clone()], &[generate_key_image(&funding.x)], &destinations, &[4000], &amounts,
        &[funding_ring.clone()], &amount_keys, &[0], 0, &device
    ).unwrap();
    device.close_tx().unwrap();
    assert!(ver_rct(&rv, false, &funding_ring, &generate_key_image(&funding.x)).unwrap());

    //the receiver recovers the one-time keys and masks of its outputs
    let mut in_sk = Vec::new();
    let mut key_images = Vec::new();
    let mut mix_ring = Vec::new();
    for i in 0..amounts.len() {
        let helper = generate_key_image_helper(&receiver, &tx_pub, i as u64, Some(&rv.ecdh_info[i].mask), &device).unwrap();
        let decoded = decode_rct(&rv, &amount_keys[i], i, &device).unwrap();
        assert_eq!(decoded.amount, amounts[i]);
        assert_eq!(decoded.mask, helper.in_ephemeral.mask);

        in_sk.push(helper.in_ephemeral.to_secret_commitment());
        key_images.push(helper.key_image);
        mix_ring.push(vec!(RingMember::new(random_point(), Commitment(random_point())), rv.out_pk[i]));
    }

    //and spends both of them
    let rv = gen_rct(
        &[2u8; 32], &in_sk, &key_images, &[random_point()], &amounts, &[3990],
        &mix_ring, &[random_scalar()], &[1, 1], 10, &device
    ).unwrap();
    assert!(ver_rct_simple(&rv, true, &mix_ring, &key_images).unwrap());
    assert!(ver_rct_simple(&rv, false, &mix_ring, &key_images).unwrap());
}
