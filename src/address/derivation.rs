/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! One-time key derivation from a transaction public key.

use crate::internal_common::*;
use zeroize::Zeroize;

///Write `n` as a little-endian base-128 varint.
pub(crate) fn encode_varint(mut n: u64, out: &mut Vec<u8>) {
    while n >= 0x80 {
        out.push((n as u8 & 0x7f) | 0x80);
        n >>= 7;
    }
    out.push(n as u8);
}

///The shared secret point between a transaction key and a view key: `r * A == a * R`.
///
///**This should not be publically shared.**
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDerivation(
    pub RistrettoPoint

); impl KeyDerivation {
    ///Given a public key and a private key, compute their shared derivation.
    pub fn generate(public: &RistrettoPoint, secret: &Scalar) -> Self {
        return Self(secret * public)
    }

    ///Check whether this derivation can be used at all.
    ///
    ///A derivation against the identity (ie from an identity transaction key) is known to everybody.
    pub fn is_usable(&self) -> bool {
        return !self.0.is_identity()
    }

    ///`H_s(D || varint(output_index))`
    ///
    ///This is also the amount key which blinds output `output_index`'s ECDH tuple.
    pub fn to_scalar(&self, output_index: u64) -> Scalar {
        let mut msg = encode_point(&self.0).to_vec();
        encode_varint(output_index, &mut msg);
        let scalar = domain_h_scalar(&msg, domains::KEY_DERIVATION);
        msg.zeroize();
        return scalar
    }

    ///One-time public key of output `output_index`: `B + H_s(D, i) * G`
    pub fn derive_public_key(&self, output_index: u64, base: &RistrettoPoint) -> RistrettoPoint {
        return base + (&self.to_scalar(output_index) * G)
    }

    ///One-time secret key of output `output_index`: `b + H_s(D, i)`
    pub fn derive_secret_key(&self, output_index: u64, base: &Scalar) -> Scalar {
        return base + self.to_scalar(output_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn varint(n: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_varint(n, &mut out);
        return out
    }

    #[test]
    fn varint_encoding() {
        assert_eq!(varint(0), vec!(0x00));
        assert_eq!(varint(0x7f), vec!(0x7f));
        assert_eq!(varint(0x80), vec!(0x80, 0x01));
        assert_eq!(varint(300), vec!(0xac, 0x02));
        assert_eq!(varint(u64::MAX).len(), 10);
    }

    #[test]
    fn derived_keys_match() {
        let (r, a, b) = (random_scalar(), random_scalar(), random_scalar());
        let sender = KeyDerivation::generate(&(&a * G), &r);
        let receiver = KeyDerivation::generate(&(&r * G), &a);
        assert_eq!(sender, receiver);

        for i in [0u64, 1, 200] {
            let public = sender.derive_public_key(i, &(&b * G));
            assert_eq!(&receiver.derive_secret_key(i, &b) * G, public);
        }
        assert_ne!(sender.to_scalar(0), sender.to_scalar(1));
    }
}
