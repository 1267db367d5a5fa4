/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;
use crate::device::Device;
use super::{RctSignatures, RctType};

///The opening of a received output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedAmount {
    pub amount: u64,
    pub mask: Scalar
}

fn decode<D: Device + ?Sized>(
    rv: &RctSignatures, amount_key: &Scalar, i: usize, device: &D
) -> Result<DecodedAmount, RctError> {
    if i >= rv.ecdh_info.len() {
        return Err(RctError::OutputIndexOutOfRange { index: i })
    }
    if rv.out_pk.len() != rv.ecdh_info.len() {
        return Err(RctError::MismatchedLengths("outputs and ECDH info"))
    }

    let decoded = device.ecdh_decode(&rv.ecdh_info[i], amount_key)?;

    //the opening must reproduce the output's commitment, or the output cannot be spent
    if vartime_commit(&decoded.amount, &decoded.mask) != rv.out_pk[i].mask.0 {
        tracing::error!(output = i, "amount decoded incorrectly, will be unable to spend");
        return Err(RctError::AmountDecodeMismatch)
    }
    let amount = scalar_to_amount(&decoded.amount).ok_or_else(|| {
        tracing::error!(output = i, "decoded amount does not fit in 64 bits");
        RctError::AmountDecodeMismatch
    })?;

    return Ok(DecodedAmount { amount, mask: decoded.mask })
}

///Decode the amount and mask of output `i` of a `Full` signature, given its amount key.
///
///Returns `RctError::AmountDecodeMismatch` if the result does not open the output's commitment,
///which happens with the wrong key or corrupted data.
pub fn decode_rct<D: Device + ?Sized>(
    rv: &RctSignatures, amount_key: &Scalar, i: usize, device: &D
) -> Result<DecodedAmount, RctError> {
    match rv.rct_type {
        RctType::Full | RctType::FullBulletproof => (),
        found => return Err(RctError::WrongType { expected: RctType::Full, found })
    }
    return decode(rv, amount_key, i, device)
}

///Decode the amount and mask of output `i` of a `Simple` signature, given its amount key.
///
///Returns `RctError::AmountDecodeMismatch` if the result does not open the output's commitment,
///which happens with the wrong key or corrupted data.
pub fn decode_rct_simple<D: Device + ?Sized>(
    rv: &RctSignatures, amount_key: &Scalar, i: usize, device: &D
) -> Result<DecodedAmount, RctError> {
    match rv.rct_type {
        RctType::Simple | RctType::SimpleBulletproof => (),
        found => return Err(RctError::WrongType { expected: RctType::Simple, found })
    }
    return decode(rv, amount_key, i, device)
}
