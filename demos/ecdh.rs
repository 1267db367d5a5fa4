// SPDX short identifier: Unlicense

use borromean_rct::{
    common::*,
    address::AccountKeys,
    ecdh::{
        EcdhTuple,
        encode_ecdh,
        decode_ecdh
    }
};

fn main() {
    let receiver = AccountKeys::generate();

    // **Sender**

    //A fresh secret key per transaction, published as tx_secret * G
    let tx_secret = random_scalar();
    let tx_public = &tx_secret * G;

    //One-time public key of output 0, and the amount key which hides its opening
    let (one_time_key, amount_key) = receiver.to_public().derive_output(&tx_secret, 0);

    let value: u64 = 123;
    let mask = random_scalar();
    let encoded = encode_ecdh(&EcdhTuple::new(mask, value), &amount_key);


    // **Receiver**

    //The receiver repeats the derivation with its private view key
    let derivation = borromean_rct::address::KeyDerivation::generate(&tx_public, &receiver.view.secret);
    assert_eq!(derivation.derive_public_key(0, &receiver.spend.public), one_time_key);

    let decoded = decode_ecdh(&encoded, &derivation.to_scalar(0));
    assert_eq!(decoded, EcdhTuple::new(mask, value));
    assert_eq!(scalar_to_amount(&decoded.amount), Some(value));
}
