/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Verification of RingCT signatures.
//!
//! Both verifiers run in two independent modes:
//! * semantics (`semantics = true`): shape, balance (`Simple` only) and rangeproofs,
//!   everything that can be checked without the rings.
//! * non-semantics (`semantics = false`): the MLSAGs, against the rings and key images.
//!
//! A signature received from the network which is malformed or invalid yields `Ok(false)`.
//! `Err` is only returned when the caller's own arguments do not fit together.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::internal_common::*;
use crate::rangeproof::RangeSignature;
use super::{RctSignatures, RctType, hash_pre_mlsag};
use super::serialization::pre_mlsag_hashes;
use super::generate::key_matrix;

//true if `check` passes for every item, items are independent so they may be checked in parallel
#[cfg(not(feature = "parallel"))]
fn all_valid<T, F>(items: &[T], check: F) -> bool
where T: Sync, F: Fn(usize, &T) -> bool + Sync + Send {
    return items.iter().enumerate().all(|(i, item)| check(i, item))
}

#[cfg(feature = "parallel")]
fn all_valid<T, F>(items: &[T], check: F) -> bool
where T: Sync, F: Fn(usize, &T) -> bool + Sync + Send {
    return items.par_iter().enumerate().all(|(i, item)| check(i, item))
}

fn check_type(rv: &RctSignatures, expected: RctType) -> Result<(), RctError> {
    return match rv.rct_type {
        found if found == expected => Ok(()),
        found @ (RctType::FullBulletproof | RctType::SimpleBulletproof) => Err(RctError::UnsupportedType(found)),
        found => Err(RctError::WrongType { expected, found })
    }
}

//one rangeproof and one ECDH tuple per output
fn outputs_well_formed(rv: &RctSignatures) -> bool {
    if rv.out_pk.len() != rv.p.range_sigs.len() {
        tracing::warn!(
            outputs = rv.out_pk.len(), range_sigs = rv.p.range_sigs.len(),
            "mismatched sizes of outputs and rangeproofs"
        );
        return false
    }
    if rv.out_pk.len() != rv.ecdh_info.len() {
        tracing::warn!(
            outputs = rv.out_pk.len(), ecdh_info = rv.ecdh_info.len(),
            "mismatched sizes of outputs and ECDH info"
        );
        return false
    }
    return true
}

fn range_proofs_valid(rv: &RctSignatures) -> bool {
    return all_valid(&rv.p.range_sigs, |i: usize, range_sig: &RangeSignature| {
        let valid = range_sig.verify(&rv.out_pk[i].mask);
        if !valid {
            tracing::warn!(output = i, "rangeproof verification failed");
        }
        valid
    })
}

fn pre_mlsag_hash(rv: &RctSignatures) -> [u8; 32] {
    let (_, hashes) = pre_mlsag_hashes(rv);
    return hash_pre_mlsag(&hashes)
}

///Verify the MLSAG of a `Full` signature against `ring`,
///whose commitment row is offset by every output commitment and the fee.
fn ver_rct_mg(rv: &RctSignatures, message: &[u8; 32], ring: &[RingMember], key_image: &RistrettoPoint) -> bool {
    let sum_c: RistrettoPoint = rv.out_pk.iter().map(|o| o.mask.0).sum::<RistrettoPoint>()
        + scalarmult_h(rv.txn_fee);
    return rv.p.mgs[0].verify(message, &key_matrix(ring, &sum_c), key_image)
}

///Verify the MLSAG of input `i` of a `Simple` signature against its pseudo-output.
fn ver_rct_mg_simple(
    rv: &RctSignatures, message: &[u8; 32], i: usize, ring: &[RingMember], key_image: &RistrettoPoint
) -> bool {
    return rv.p.mgs[i].verify(message, &key_matrix(ring, &rv.pseudo_outs[i].0), key_image)
}

///Verify a `Full` (single input) RingCT signature.
/// * `semantics`: check the shape and rangeproofs if `true`, the MLSAG if `false`
/// * `ring`: the ring of the single input, only used if `semantics` is `false`
/// * `key_image`: the key image of the single input, only used if `semantics` is `false`
///
///Returns `RctError` if `rv` is not a `Full` signature.
pub fn ver_rct(
    rv: &RctSignatures, semantics: bool, ring: &[RingMember], key_image: &RistrettoPoint
) -> Result<bool, RctError> {
    check_type(rv, RctType::Full)?;

    if semantics {
        if !outputs_well_formed(rv) {
            return Ok(false)
        }
        if rv.p.mgs.len() != 1 {
            tracing::warn!(mgs = rv.p.mgs.len(), "full signature must have exactly one MLSAG");
            return Ok(false)
        }
        return Ok(range_proofs_valid(rv))
    }

    if rv.p.mgs.len() != 1 {
        tracing::warn!(mgs = rv.p.mgs.len(), "full signature must have exactly one MLSAG");
        return Ok(false)
    }
    let message = pre_mlsag_hash(rv);
    let valid = ver_rct_mg(rv, &message, ring, key_image);
    if !valid {
        tracing::warn!("MLSAG verification failed");
    }
    return Ok(valid)
}

///Verify a `Simple` (one pseudo-output per input) RingCT signature.
/// * `semantics`: check the shape, balance and rangeproofs if `true`, the MLSAGs if `false`
/// * `mix_ring`: the ring of every input, only used if `semantics` is `false`
/// * `key_images`: the key image of every input, only used if `semantics` is `false`
///
///Returns `RctError` if `rv` is not a `Simple` signature,
///or if `mix_ring` and `key_images` do not have one entry per input.
pub fn ver_rct_simple(
    rv: &RctSignatures, semantics: bool, mix_ring: &[Vec<RingMember>], key_images: &[RistrettoPoint]
) -> Result<bool, RctError> {
    check_type(rv, RctType::Simple)?;

    if rv.pseudo_outs.len() != rv.p.mgs.len() {
        tracing::warn!(
            pseudo_outs = rv.pseudo_outs.len(), mgs = rv.p.mgs.len(),
            "mismatched sizes of pseudo-outputs and MLSAGs"
        );
        return Ok(false)
    }
    if rv.p.mgs.is_empty() {
        tracing::warn!("simple signature has no inputs");
        return Ok(false)
    }

    if semantics {
        if !outputs_well_formed(rv) {
            return Ok(false)
        }

        //sum(pseudo_outs) == sum(out_pk.mask) + (fee * H)
        let out_commitments: Vec<Commitment> = rv.out_pk.iter().map(|o| o.mask).collect();
        if !Commitment::is_balanced(&rv.pseudo_outs, &out_commitments, rv.txn_fee) {
            tracing::warn!("sum check failed");
            return Ok(false)
        }

        return Ok(range_proofs_valid(rv))
    }

    let inputs = rv.p.mgs.len();
    if mix_ring.len() != inputs {
        return Err(RctError::MismatchedLengths("mix ring and MLSAGs"))
    }
    if key_images.len() != inputs {
        return Err(RctError::MismatchedLengths("key images and MLSAGs"))
    }

    let message = pre_mlsag_hash(rv);
    let valid = all_valid(mix_ring, |i: usize, ring: &Vec<RingMember>| {
        let valid = ver_rct_mg_simple(rv, &message, i, ring, &key_images[i]);
        if !valid {
            tracing::warn!(input = i, "MLSAG verification failed");
        }
        valid
    });
    return Ok(valid)
}
