/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use blake2::{
    Blake2b,
    Digest,
    digest::consts::{U32, U64}
};
use crate::curve::*;

type Blake2b256 = Blake2b<U32>;
type Blake2b512 = Blake2b<U64>;

///Hash bytes to bytes, domain separated.
pub fn domain_h_bytes(msg: &[u8], domain: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::default();
    hasher.update(msg);
    hasher.update(domain);
    return hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length");
}

///Hash bytes to elliptic curve point, domain separated.
pub fn domain_h_point(msg: &[u8], domain: &[u8]) -> RistrettoPoint {
    let mut hasher = Blake2b512::default();
    hasher.update(msg);
    hasher.update(domain);
    return RistrettoPoint::from_uniform_bytes(
        hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length")
    );
}

///Hash bytes to scalar, domain separated.
pub fn domain_h_scalar(msg: &[u8], domain: &[u8]) -> Scalar {
    return Scalar::from_bytes_mod_order(
        domain_h_bytes(msg, domain));
}

///Hash bytes to bytes.
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::default();
    hasher.update(msg);
    return hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length");
}

///Hash bytes to elliptic curve point.
pub fn h_point(msg: &[u8]) -> RistrettoPoint {
    let mut hasher = Blake2b512::default();
    hasher.update(msg);
    return RistrettoPoint::from_uniform_bytes(
        hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length")
    );
}

///Hash bytes to scalar.
pub fn h_scalar(msg: &[u8]) -> Scalar {
    return Scalar::from_bytes_mod_order(h_bytes(msg));
}

///Hash a point to the point used for its key image, `Hp(P)`.
pub fn h_key_image_point(public_key: &RistrettoPoint) -> RistrettoPoint {
    return domain_h_point(&encode_point(public_key), domains::KEY_IMAGE);
}

pub mod domains {
    //! Pre-defined hash domains

    pub const KEY_IMAGE: &[u8] =                "key_img".as_bytes();
    pub const KEY_DERIVATION: &[u8] =           "key_deriv".as_bytes();

    pub const MLSAG_ROUND: &[u8] =              "mlsag_round".as_bytes();
    pub const MLSAG_PREHASH: &[u8] =            "mlsag_prehash".as_bytes();

    pub const BORROMEAN_LINK: &[u8] =           "borromean_link".as_bytes();
    pub const BORROMEAN_SEED: &[u8] =           "borromean_seed".as_bytes();

    pub const ECDH_MASK: &[u8] =                "ecdh_mask".as_bytes();
    pub const ECDH_AMOUNT: &[u8] =              "ecdh_amount".as_bytes();

    pub const RCT_BASE: &[u8] =                 "rct_base".as_bytes();
    pub const RCT_RANGE_PROOFS: &[u8] =         "rct_range".as_bytes();
}
