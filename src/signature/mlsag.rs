/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zeroize::Zeroize;

use crate::internal_common::*;
use crate::device::Device;
use super::signature_utils::*;

///A RingCT ring signature over a key matrix with `MLSAG_ROWS` rows.
///
///MLSAG stands for "Multilayered Linkable Spontaneous Anonymous Group (signature)".
///Only the first row is linked to the key image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MlsagSignature {
    ///One response per row, for every column.
    pub ss: Vec<[Scalar; MLSAG_ROWS]>,
    ///Challenge of column 0.
    pub cc: Scalar,

} impl MlsagSignature {
    ///Sign `message`, knowing `secrets` for every row of column `index` of `pk`.
    ///
    ///`key_image` must be `secrets[0] * Hp(pk[index][0])`,
    ///otherwise the signature is created but will not verify.
    ///
    ///Returns `SignatureError::IndexOutOfRange` if `index` is not a column of `pk`.
    pub fn sign<D: Device + ?Sized>(
        message: &[u8; 32],
        pk: &[KeyColumn],
        secrets: &[Scalar; MLSAG_ROWS],
        key_image: &RistrettoPoint,
        index: usize,
        device: &D
    ) -> Result<Self, SignatureError> {
        let cols = pk.len();
        if index >= cols {
            return Err(SignatureError::IndexOutOfRange { index, cols })
        }
        tracing::debug!(cols, device = device.name(), "generating MLSAG");

        let mut ss = vec!([Scalar::zero(); MLSAG_ROWS]; cols);

        //secret column: commit to a nonce per row
        let hp = h_key_image_point(&pk[index][0]);
        let nonce = device.mlsag_prepare(&hp, &secrets[0])?;
        let mut alpha = [nonce.a, random_scalar()];
        let nds_l = &alpha[1] * G;
        let mut c_old = device.mlsag_hash(&round_to_hash(
            message, &[pk[index][0], nonce.a_g, nonce.a_hp, pk[index][1], nds_l]
        ))?;

        let mut cc = Scalar::zero();
        let mut i = (index + 1) % cols;
        if i == 0 {
            cc = c_old;
        }

        //forge every other column, each challenge depends on the previous one
        while i != index {
            ss[i] = [random_scalar(), random_scalar()];
            let points = round_points(&pk[i], &ss[i], &c_old, key_image);
            c_old = device.mlsag_hash(&round_to_hash(message, &points))?;

            i = (i + 1) % cols;
            if i == 0 {
                cc = c_old;
            }
        }

        //"tie" the ring with the real secrets
        let signed = device.mlsag_sign(&c_old, secrets, &alpha, 1);
        alpha.zeroize();
        ss[index] = signed?;

        return Ok(Self { ss, cc })
    }

    ///Check the signature against `message`, the key matrix `pk` and `key_image`.
    ///
    ///Returns `false` if the signature is invalid or its shape does not match `pk`.
    pub fn verify(&self, message: &[u8; 32], pk: &[KeyColumn], key_image: &RistrettoPoint) -> bool {
        /*
        Note: Ristretto has no small subgroup, so there is no need to check that
        the key image is in the prime order subgroup as CryptoNote must.
        */
        let cols = pk.len();
        if cols == 0 || self.ss.len() != cols {
            return false
        }

        //travel around the ring
        let mut c_old = self.cc;
        for i in 0..cols {
            let points = round_points(&pk[i], &self.ss[i], &c_old, key_image);
            c_old = hash_mlsag_round(&round_to_hash(message, &points));
        }

        //check if we end up back where we started
        return c_old == self.cc
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for MlsagSignature {}
