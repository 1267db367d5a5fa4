/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Borromean ring signatures with 2 keys per ring and `BIT_RANGE` rings sharing one seed

use zeroize::Zeroize;

use crate::internal_common::*;
use super::BIT_RANGE;

//challenge of the next key in a ring
fn link_hash(point: &RistrettoPoint) -> Scalar {
    return domain_h_scalar(&encode_point(point), domains::BORROMEAN_LINK)
}

//the shared seed of all rings
fn seed_hash(points: &[RistrettoPoint]) -> Scalar {
    return domain_h_scalar(&batch_encode_points(points).concat(), domains::BORROMEAN_SEED)
}

///Borromean ring signature: for every position `i`,
///proves knowledge of the private key of either `P0[i]` or `P1[i]`.
///
///`s0` and `s1` always hold `BIT_RANGE` responses.
///They are `Vec`s only so that they can be (de)serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BorromeanSignature {
    pub s0: Vec<Scalar>,
    pub s1: Vec<Scalar>,
    pub ee: Scalar

} impl BorromeanSignature {
    ///Sign, knowing `secrets[i]`, the private key of `keys[indices[i] as usize][i]`.
    ///
    ///`keys[0]` are the "bit is 0" keys and `keys[1]` the "bit is 1" keys.
    pub fn sign(
        secrets: &[Scalar; BIT_RANGE],
        keys: &[[RistrettoPoint; BIT_RANGE]; 2],
        indices: &[bool; BIT_RANGE]
    ) -> Self {
        let mut alpha: Vec<Scalar> = Vec::with_capacity(BIT_RANGE);
        let mut l1 = [G_POINT; BIT_RANGE];
        let mut s0 = vec!(Scalar::zero(); BIT_RANGE);
        let mut s1 = vec!(Scalar::zero(); BIT_RANGE);

        //commit to a nonce in the real branch and forge forward into branch 1 when needed
        for i in 0..BIT_RANGE {
            alpha.push(random_scalar());
            let l_real = &alpha[i] * G;
            if indices[i] {
                l1[i] = l_real;
            } else {
                s1[i] = random_scalar();
                let c = link_hash(&l_real);
                l1[i] = (&s1[i] * G) + (c * keys[1][i]);
            }
        }

        let ee = seed_hash(&l1);

        //"tie" every ring, starting from the shared seed
        for i in 0..BIT_RANGE {
            if indices[i] {
                s0[i] = random_scalar();
                let l0 = (&s0[i] * G) + (ee * keys[0][i]);
                let c = link_hash(&l0);
                s1[i] = alpha[i] - (secrets[i] * c);
            } else {
                s0[i] = alpha[i] - (secrets[i] * ee);
            }
        }
        alpha.zeroize();

        return Self { s0, s1, ee }
    }

    ///Verify against the "bit is 0" keys `p0` and the "bit is 1" keys `p1`.
    ///
    ///Returns `false` on any mismatch, including wrongly sized inputs.
    pub fn verify(&self, p0: &[RistrettoPoint], p1: &[RistrettoPoint]) -> bool {
        if self.s0.len() != BIT_RANGE || self.s1.len() != BIT_RANGE
            || p0.len() != BIT_RANGE || p1.len() != BIT_RANGE {
            return false
        }

        let mut l1 = [G_POINT; BIT_RANGE];
        for i in 0..BIT_RANGE {
            //(s0 * G) + (ee * P0)
            let l0 = vartime_add_keys2(&self.s0[i], &self.ee, &p0[i]);
            let c = link_hash(&l0);
            //(s1 * G) + (c * P1)
            l1[i] = vartime_add_keys2(&self.s1[i], &c, &p1[i]);
        }

        //check if we end up back where we started
        return seed_hash(&l1) == self.ee
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for BorromeanSignature {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    //random keys where the secret of keys[indices[i]][i] is known
    fn parameters() -> ([Scalar; BIT_RANGE], [[RistrettoPoint; BIT_RANGE]; 2], [bool; BIT_RANGE]) {
        let mut secrets = [Scalar::zero(); BIT_RANGE];
        let mut keys = [[G_POINT; BIT_RANGE]; 2];
        let mut indices = [false; BIT_RANGE];
        for i in 0..BIT_RANGE {
            indices[i] = thread_rng().gen::<bool>();
            secrets[i] = random_scalar();
            keys[indices[i] as usize][i] = &secrets[i] * G;
            keys[!indices[i] as usize][i] = random_point();
        }
        return (secrets, keys, indices)
    }

    #[test]
    fn borromean_round_trip() {
        for _ in 0..4 {
            let (secrets, keys, indices) = parameters();
            let sig = BorromeanSignature::sign(&secrets, &keys, &indices);
            assert!(sig.verify(&keys[0], &keys[1]));
        }
    }

    #[test]
    fn flipped_index_fails() {
        let (secrets, keys, mut indices) = parameters();
        indices[3] = !indices[3];
        let sig = BorromeanSignature::sign(&secrets, &keys, &indices);
        assert!(!sig.verify(&keys[0], &keys[1]));
    }

    #[test]
    fn swapped_key_sets_fail() {
        let (secrets, keys, indices) = parameters();
        let sig = BorromeanSignature::sign(&secrets, &keys, &indices);
        assert!(!sig.verify(&keys[1], &keys[0]));
    }

    #[test]
    fn truncated_signature_fails() {
        let (secrets, keys, indices) = parameters();
        let mut sig = BorromeanSignature::sign(&secrets, &keys, &indices);
        sig.s1.pop();
        assert!(!sig.verify(&keys[0], &keys[1]));
    }
}
