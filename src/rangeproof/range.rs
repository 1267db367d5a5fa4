/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Bit-decomposition rangeproofs:
//! `C = sum(C_i)` where every `C_i` is a commitment to either `0` or `2^i`.

use zeroize::Zeroize;

use crate::internal_common::*;
use super::{BIT_RANGE, BorromeanSignature};

///A commitment, its blinding factor, and the rangeproof for it.
#[derive(Debug, Clone)]
pub struct ProvenRange {
    pub commitment: Commitment,
    pub mask: Scalar,
    pub signature: RangeSignature
}

///Rangeproof based on a borromean ring signature over one sub-commitment per bit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeSignature {
    ///`C_i`, one commitment per bit. Always `BIT_RANGE` long.
    pub ci: Vec<Commitment>,
    pub bsig: BorromeanSignature

} impl RangeSignature {
    ///Commit to `amount` with a fresh random mask and prove that it is in range.
    ///
    ///The returned commitment is `(mask * G) + (amount * H)`.
    pub fn prove(amount: u64) -> ProvenRange {
        let mut indices = [false; BIT_RANGE];
        let mut ai = [Scalar::zero(); BIT_RANGE];
        //pm[0][i] is C_i, pm[1][i] is C_i - 2^i * H
        let mut pm = [[G_POINT; BIT_RANGE]; 2];
        let mut mask = Scalar::zero();

        for i in 0..BIT_RANGE {
            indices[i] = (amount >> i) & 1 == 1;
            ai[i] = random_scalar();

            if indices[i] {
                pm[1][i] = &ai[i] * G;
                pm[0][i] = pm[1][i] + H2[i];
            } else {
                pm[0][i] = &ai[i] * G;
                pm[1][i] = pm[0][i] - H2[i];
            }
            mask += ai[i];
        }

        let commitment: RistrettoPoint = pm[0].iter().sum();
        let bsig = BorromeanSignature::sign(&ai, &pm, &indices);
        for a in ai.iter_mut() {
            a.zeroize();
        }

        return ProvenRange {
            commitment: Commitment(commitment),
            mask,
            signature: Self {
                ci: pm[0].iter().map(|c| Commitment(*c)).collect(),
                bsig
            }
        }
    }

    ///Verify that `commitment` is a commitment to an amount in range.
    ///
    ///Returns `false` if the proof is invalid or malformed.
    pub fn verify(&self, commitment: &Commitment) -> bool {
        if self.ci.len() != BIT_RANGE {
            return false
        }

        //check if the bit-commitments equal the total commitment
        let c_tmp: Commitment = self.ci.iter().copied().sum();
        if c_tmp != *commitment {
            return false
        }

        let ci: Vec<RistrettoPoint> = self.ci.iter().map(|c| c.0).collect();
        let ci_h: Vec<RistrettoPoint> = ci.iter().zip(H2.iter())
            .map(|(c, h)| c - h).collect();

        return self.bsig.verify(&ci, &ci_h)
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RangeSignature {}
