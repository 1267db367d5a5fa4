// SPDX short identifier: Unlicense

use borromean_rct::{
    common::*,
    hashes::h_bytes,
    device::{
        Device,
        DeviceMode,
        SoftwareDevice
    },
    address::{
        AccountKeys,
        generate_key_image_helper
    },
    rct::{
        gen_rct,
        ver_rct,
        decode_rct,
        estimate_rct_size
    }
};

const RINGSIZE: usize = 11;

//Generate random ring members to use as decoys.
//In a real transaction protocol these would be outputs of previous transactions
fn generate_decoys(n: usize) -> Vec<RingMember> {
    let mut decoys: Vec<RingMember> = vec!();
    for _ in 0..n {
        decoys.push(RingMember::new(random_point(), Commitment(random_point())));
    }
    return decoys
}

fn main() {
    //See the relevant demos before this.
    //Note that this is meant to be a quick example: the transaction prefix is just a hash of the outputs.

    let mut device = SoftwareDevice::new();
    device.set_mode(DeviceMode::TransactionCreateReal)
        .expect("Real software should have proper error handling.");

    let sender_keys = AccountKeys::generate();
    let receiver_keys = AccountKeys::generate();

    //The output being spent, received by the sender in an earlier transaction
    let prev_tx_secret = random_scalar();
    let prev_tx_public = (&prev_tx_secret * G).compress();
    let (prev_dest, _) = sender_keys.to_public().derive_output(&prev_tx_secret, 0);
    let input = generate_key_image_helper(&sender_keys, &prev_tx_public, 0, None, &device)
        .expect("Real software should have proper error handling.");
    assert_eq!(input.in_ephemeral.public, prev_dest);
    //A public amount of 1000, with the identity mask
    let in_sk = input.in_ephemeral.to_secret_commitment();


    // **Create transaction**

    let tx_secret = device.open_tx()
        .expect("Real software should have proper error handling.");
    let tx_public = (&tx_secret * G).compress();

    //payment to recipient, and "change" for sender
    let out_amounts = [600, 350];
    let (dest_1, amount_key_1) = receiver_keys.to_public().derive_output(&tx_secret, 0);
    let (dest_2, amount_key_2) = sender_keys.to_public().derive_output(&tx_secret, 1);

    //create ring, hiding the real input among decoys
    let mut ring = generate_decoys(RINGSIZE - 1);
    let index = 4;
    ring.insert(index, in_sk.to_ring_member(1000));

    //The input is 1000, and the outputs are 600 and 350.
    //1000 - (600 + 350) = 50 remaining fee
    let fee = 50;

    let message = h_bytes(&[dest_1.compress().to_bytes(), dest_2.compress().to_bytes()].concat());
    let rv = gen_rct(
        &message,
        &[in_sk],
        &[input.key_image],
        &[dest_1, dest_2],
        &[1000],
        &out_amounts,
        &[ring.clone()],
        &[amount_key_1, amount_key_2],
        &[index],
        fee,
        &device
    ).expect("Real software should have proper error handling.");
    device.close_tx()
        .expect("Real software should have proper error handling.");
    println!("Estimated transaction size: {} bytes", estimate_rct_size(1, RINGSIZE - 1, 2));


    // **Verify transaction**

    //rangeproofs and shape
    assert!(ver_rct(&rv, true, &ring, &input.key_image)
        .expect("Real software should have proper error handling."));
    //ring signature, which also proves that the inputs and outputs balance
    assert!(ver_rct(&rv, false, &ring, &input.key_image)
        .expect("Real software should have proper error handling."));


    // **Receive from transaction**

    //In practice, we would need to scan every output in every transaction for an incoming payment
    let received = generate_key_image_helper(
        &receiver_keys, &tx_public, 0, Some(&rv.ecdh_info[0].mask), &device
    ).expect("Real software should have proper error handling.");
    assert_eq!(received.in_ephemeral.public, rv.out_pk[0].dest);

    let amount_key = derivation_amount_key(&receiver_keys, &tx_public);
    let decoded = decode_rct(&rv, &amount_key, 0, &device)
        .expect("Real software should have proper error handling.");
    assert_eq!(decoded.amount, 600);
    assert_eq!(decoded.mask, received.in_ephemeral.mask);
}

//The amount key of output 0, as seen by the receiver
fn derivation_amount_key(keys: &AccountKeys, tx_public: &CompressedRistretto) -> Scalar {
    let tx_public = tx_public.decompress()
        .expect("Real software should have proper error handling.");
    return borromean_rct::address::KeyDerivation::generate(&tx_public, &keys.view.secret).to_scalar(0)
}
