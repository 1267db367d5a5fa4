/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::curve::*;
use crate::hashes::*;

///Rows of an MLSAG key matrix: the one-time key (linkable) and the commitment (not linkable).
pub const MLSAG_ROWS: usize = 2;

///One column of an MLSAG key matrix: `[one-time public key, commitment to zero]`.
pub type KeyColumn = [RistrettoPoint; MLSAG_ROWS];

///Hash one round of an MLSAG: `[message, pubkey, ds_L, ds_R, commitment, nds_L]`.
///
///Devices must compute `mlsag_hash` exactly like this,
///since verification does not go through a device.
pub fn hash_mlsag_round(to_hash: &[[u8; 32]; 6]) -> Scalar {
    return domain_h_scalar(&to_hash.concat(), domains::MLSAG_ROUND)
}

///Encode the message and the 5 points of a round for hashing.
pub(crate) fn round_to_hash(message: &[u8; 32], points: &[RistrettoPoint; 5]) -> [[u8; 32]; 6] {
    let encoded = batch_encode_points(points);
    return [*message, encoded[0], encoded[1], encoded[2], encoded[3], encoded[4]]
}

///The points hashed for a column whose responses `s` are known, given the previous challenge `c`.
pub(crate) fn round_points(
    column: &KeyColumn, s: &[Scalar; MLSAG_ROWS], c: &Scalar, key_image: &RistrettoPoint
) -> [RistrettoPoint; 5] {
    let hp = h_key_image_point(&column[0]);
    return [
        column[0],
        //(s0 * G) + (c * P)
        vartime_add_keys2(&s[0], c, &column[0]),
        //(s0 * Hp(P)) + (c * I)
        RistrettoPoint::vartime_multiscalar_mul(
            vec!(s[0], *c), vec!(hp, *key_image)
        ),
        column[1],
        //(s1 * G) + (c * C)
        vartime_add_keys2(&s[1], c, &column[1]),
    ]
}
