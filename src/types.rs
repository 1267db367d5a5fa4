/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::iter::Sum;

use crate::tobytes::*;
use crate::curve::*;
use crate::pedersen::*;

use zeroize::Zeroize;

///A pedersen commitment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commitment(
    pub RistrettoPoint

); impl Commitment {
    ///create a commitment to `value` with blinding factor `blinding`
    pub fn commit(value: u64, blinding: Scalar) -> Self {
        return commit(&amount_to_scalar(value), &blinding)
    }

    ///Return the elliptic curve point which represents this commitment.
    ///To convert an elliptic curve point back into a commitment, use `Commitment(point)`.
    pub fn to_point(&self) -> RistrettoPoint {
        return self.0;
    }

    ///Given input commitments, output commitments, and "extra" output (ie fees),
    ///check if the equation is balanced.
    ///
    ///`in == (out + extra)`
    pub fn is_balanced(in_commitments: &[Commitment], out_commitments: &[Commitment], extra: u64) -> bool {
        let inputs: Commitment = in_commitments.iter().copied().sum();
        let outputs: Commitment = out_commitments.iter().copied().sum();
        return inputs.0 == outputs.0 + scalarmult_h(extra)
    }

} impl Sum for Commitment {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        return Commitment(iter.map(|com| com.0).sum())
    }

} impl Default for Commitment {
    fn default() -> Self {
        return Commitment(RistrettoPoint::identity())
    }
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for Commitment {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.0.compress().to_bytes().to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return Ok(Self(RistrettoPoint::from_bytes(bytes)?))
    }
}

///One column of a ring: a candidate one-time public key (`dest`)
///and the commitment (`mask`) of the output it belongs to.
///
///The same pair is used for the outputs of a transaction (`out_pk`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingMember {
    pub dest: RistrettoPoint,
    pub mask: Commitment

} impl RingMember {
    pub fn new(dest: RistrettoPoint, mask: Commitment) -> Self {
        return Self{dest, mask}
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RingMember {}

///The private half of a `RingMember` for the real signer.
/// * `x`: the one-time secret key of `dest`
/// * `a`: the blinding factor of `mask`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Zeroize)]
pub struct SecretCommitment {
    pub x: Scalar,
    pub a: Scalar

} impl SecretCommitment {
    pub fn new(x: Scalar, a: Scalar) -> Self {
        return Self{x, a}
    }

    ///Turn these secrets into the public ring member which they open, given the committed amount.
    pub fn to_ring_member(&self, amount: u64) -> RingMember {
        return RingMember {
            dest: &self.x * G,
            mask: Commitment::commit(amount, self.a)
        }
    }

} impl Drop for SecretCommitment {
    fn drop(&mut self) {
        //clear the keys from memory to improve security
        self.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for SecretCommitment {}
