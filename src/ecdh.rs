/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reversible blinding of an output's `(mask, amount)` with a shared secret,
//! so that only the recipient can open the output's commitment.

use crate::internal_common::*;

///The opening of an output commitment, blinded or in the clear.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EcdhTuple {
    pub mask: Scalar,
    pub amount: Scalar

} impl EcdhTuple {
    pub fn new(mask: Scalar, amount: u64) -> Self {
        return Self {
            mask,
            amount: amount_to_scalar(amount)
        }
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for EcdhTuple {}

//H_s(k) blinds the mask, H_s(H_s(k)) blinds the amount
fn blinding_pair(shared_key: &Scalar) -> (Scalar, Scalar) {
    let first = domain_h_scalar(shared_key.as_bytes(), domains::ECDH_MASK);
    let second = domain_h_scalar(first.as_bytes(), domains::ECDH_AMOUNT);
    return (first, second)
}

///Blind the mask and amount of an output with `shared_key`.
pub fn encode_ecdh(unmasked: &EcdhTuple, shared_key: &Scalar) -> EcdhTuple {
    let (first, second) = blinding_pair(shared_key);
    return EcdhTuple {
        mask: unmasked.mask + first,
        amount: unmasked.amount + second
    }
}

///Inverse of `encode_ecdh`.
pub fn decode_ecdh(masked: &EcdhTuple, shared_key: &Scalar) -> EcdhTuple {
    let (first, second) = blinding_pair(shared_key);
    return EcdhTuple {
        mask: masked.mask - first,
        amount: masked.amount - second
    }
}

///Remove the blinding from a mask that was encoded on its own (without an amount).
pub fn decode_mask(masked: &Scalar, shared_key: &Scalar) -> Scalar {
    return masked - blinding_pair(shared_key).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecdh_round_trip() {
        for _ in 0..16 {
            //any scalars, not only u64 amounts
            let unmasked = EcdhTuple { mask: random_scalar(), amount: random_scalar() };
            let shared_key = random_scalar();

            let masked = encode_ecdh(&unmasked, &shared_key);
            assert_ne!(masked, unmasked);
            assert_eq!(decode_ecdh(&masked, &shared_key), unmasked);
            assert_eq!(decode_mask(&masked.mask, &shared_key), unmasked.mask);

            assert_ne!(decode_ecdh(&masked, &random_scalar()), unmasked);
        }
    }
}
