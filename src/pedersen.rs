/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Pedersen commitments: `C = (mask * G) + (amount * H)`

use crate::curve::*;
use crate::hashes::*;
use crate::errors::KeyError;
use crate::types::Commitment;
use crate::rangeproof::BIT_RANGE;

lazy_static! {
    pub static ref PEDERSEN_G_POINT: RistrettoPoint = G_POINT;
    pub static ref PEDERSEN_H_POINT: RistrettoPoint = pedersen_h_point();
    pub static ref PEDERSEN_G: RistrettoBasepointTable = G.to_owned();
    pub static ref PEDERSEN_H: RistrettoBasepointTable = RistrettoBasepointTable::create(&PEDERSEN_H_POINT);

    ///`H2[i] = 2^i * H`, one generator per bit of an amount.
    pub static ref H2: [RistrettoPoint; BIT_RANGE] = h2_table();

    pub(crate) static ref PEDERSEN_H_MULTISCALAR_MUL: VartimeRistrettoPrecomputation =
        VartimeRistrettoPrecomputation::new(vec!(*PEDERSEN_G_POINT, *PEDERSEN_H_POINT));
}

///get `H`
fn pedersen_h_point() -> RistrettoPoint {
    return h_point(&encode_point(&G_POINT));
}

///get `2^i * H` for every bit position
fn h2_table() -> [RistrettoPoint; BIT_RANGE] {
    let mut table = [*PEDERSEN_H_POINT; BIT_RANGE];
    for i in 1..BIT_RANGE {
        table[i] = table[i - 1] + table[i - 1];
    }
    return table
}

///Commit to an amount given as a scalar.
pub fn commit(amount: &Scalar, mask: &Scalar) -> Commitment {
    return Commitment((mask * &*PEDERSEN_G) + (amount * &*PEDERSEN_H))
}

///Commit to an amount, both operands given as 64-character hex scalars.
///
///Fails with `KeyError::InvalidInput` if either is not a canonical 32-byte scalar.
pub fn commit_hex(amount: &str, mask: &str) -> Result<Commitment, KeyError> {
    let amount = Scalar::from_hex(amount)?;
    let mask = Scalar::from_hex(mask)?;
    return Ok(commit(&amount, &mask))
}

///Commit to a public amount with the identity mask (`1 * G + amount * H`).
///
///Used to fold non-confidential outputs into a confidential ring.
pub fn zero_commit(amount: u64) -> Commitment {
    return commit(&amount_to_scalar(amount), &Scalar::one())
}

///`amount * H`, the commitment to a fee.
pub fn scalarmult_h(amount: u64) -> RistrettoPoint {
    return &amount_to_scalar(amount) * &*PEDERSEN_H
}

///`(mask * G) + (amount * H)` in variable time, for checking public commitments.
pub(crate) fn vartime_commit(amount: &Scalar, mask: &Scalar) -> RistrettoPoint {
    return PEDERSEN_H_MULTISCALAR_MUL.vartime_multiscalar_mul(vec!(*mask, *amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h2_doubles_h() {
        assert_eq!(H2[0], *PEDERSEN_H_POINT);
        assert_eq!(H2[10], &Scalar::from(1u64 << 10) * &*PEDERSEN_H);
        assert_eq!(H2[63], &Scalar::from(1u64 << 63) * &*PEDERSEN_H);
    }

    #[test]
    fn zero_commit_uses_identity_mask() {
        for amount in [0u64, 1, 6000, u64::MAX] {
            let expected = G_POINT + (&amount_to_scalar(amount) * &*PEDERSEN_H);
            assert_eq!(zero_commit(amount).0, expected);
            assert_eq!(zero_commit(amount), commit(&amount_to_scalar(amount), &Scalar::one()));
        }
        assert_eq!(zero_commit(0).0, G_POINT);
    }

    #[test]
    fn vartime_commit_matches() {
        let amount = Scalar::from(6000u64);
        let mask = random_scalar();
        assert_eq!(commit(&amount, &mask).0, vartime_commit(&amount, &mask));
    }

    #[test]
    fn commit_hex_rejects_malformed_scalars() {
        let mask = random_scalar().to_hex();
        let amount = amount_to_scalar(500).to_hex();
        assert!(commit_hex(&amount, &mask).is_ok());
        assert!(matches!(commit_hex("00", &mask), Err(KeyError::InvalidInput(_))));
        assert!(matches!(commit_hex(&amount, &"gg".repeat(32)), Err(KeyError::InvalidInput(_))));
    }
}
