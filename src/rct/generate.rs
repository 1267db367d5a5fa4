/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zeroize::Zeroize;

use crate::internal_common::*;
use crate::device::Device;
use crate::ecdh::EcdhTuple;
use crate::rangeproof::RangeSignature;
use crate::signature::{MlsagSignature, KeyColumn};
use super::{RctSignatures, RctPrunable, RctType, get_pre_mlsag_hash};

///Build the key matrix of a ring whose commitments are offset by `offset`
///(the output sum plus fee for `Full`, the pseudo-output for `Simple`).
pub(super) fn key_matrix(ring: &[RingMember], offset: &RistrettoPoint) -> Vec<KeyColumn> {
    return ring.iter()
        .map(|member| [member.dest, member.mask.0 - offset])
        .collect()
}

///Sign one ring, knowing the opening of `ring[index]`,
///where `offset_mask` is the blinding factor of `offset`.
#[allow(clippy::too_many_arguments)]
fn prove_rct_mg<D: Device + ?Sized>(
    message: &[u8; 32],
    ring: &[RingMember],
    in_sk: &SecretCommitment,
    key_image: &RistrettoPoint,
    offset_mask: &Scalar,
    offset: &RistrettoPoint,
    index: usize,
    device: &D
) -> Result<MlsagSignature, SignatureError> {
    let pk = key_matrix(ring, offset);
    let mut sk = [in_sk.x, in_sk.a - offset_mask];
    let signature = MlsagSignature::sign(message, &pk, &sk, key_image, index, device);
    sk.zeroize();
    return signature
}

///Create a RingCT signature.
/// * `message`: hash of the transaction prefix
/// * `in_sk`, `key_images`, `mix_ring`, `indices`: for every input, the secrets of the real ring member,
///   its key image, its ring, and its position in the ring
/// * `in_amounts`: amount of every input, only needed when there are several inputs
/// * `destinations`, `out_amounts`, `amount_keys`: for every output, its one-time key,
///   its amount, and the shared secret which blinds its ECDH tuple
/// * `txn_fee`: the public fee
///
///One input produces a `Full` signature, several inputs a `Simple` one.
///Returns `RctError` if the inputs are inconsistent with each other.
#[allow(clippy::too_many_arguments)]
pub fn gen_rct<D: Device + ?Sized>(
    message: &[u8; 32],
    in_sk: &[SecretCommitment],
    key_images: &[RistrettoPoint],
    destinations: &[RistrettoPoint],
    in_amounts: &[u64],
    out_amounts: &[u64],
    mix_ring: &[Vec<RingMember>],
    amount_keys: &[Scalar],
    indices: &[usize],
    txn_fee: u64,
    device: &D
) -> Result<RctSignatures, RctError> {
    if out_amounts.len() != amount_keys.len() {
        return Err(RctError::AmountKeyCountMismatch)
    }
    if out_amounts.len() != destinations.len() {
        return Err(RctError::DestinationCountMismatch)
    }
    if in_sk.is_empty() || mix_ring.len() != in_sk.len() {
        return Err(RctError::RingCountMismatch)
    }
    if indices.len() != in_sk.len() {
        return Err(RctError::IndexCountMismatch)
    }
    if key_images.len() != in_sk.len() {
        return Err(RctError::KeyImageCountMismatch)
    }
    for (input, (ring, index)) in mix_ring.iter().zip(indices).enumerate() {
        if *index >= ring.len() {
            return Err(RctError::RingIndexOutOfRange { input })
        }
    }

    let rct_type = match in_sk.len() {
        1 => RctType::Full,
        _ => RctType::Simple
    };
    tracing::debug!(
        ?rct_type, inputs = in_sk.len(), outputs = out_amounts.len(), device = device.name(),
        "generating RingCT signature"
    );

    let mut rv = RctSignatures {
        rct_type,
        message: *message,
        out_pk: Vec::with_capacity(out_amounts.len()),
        p: RctPrunable::default(),
        ecdh_info: Vec::with_capacity(out_amounts.len()),
        txn_fee,
        pseudo_outs: Vec::new(),
    };

    //compute range proofs, and blind each output's opening for its receiver
    let mut sumout = Scalar::zero();
    for i in 0..out_amounts.len() {
        let proven = RangeSignature::prove(out_amounts[i]);
        rv.out_pk.push(RingMember::new(destinations[i], proven.commitment));
        rv.p.range_sigs.push(proven.signature);
        sumout += proven.mask;

        rv.ecdh_info.push(device.ecdh_encode(
            &EcdhTuple::new(proven.mask, out_amounts[i]), &amount_keys[i])?);
    }

    let result = match rct_type {
        RctType::Full => gen_full(&mut rv, in_sk, key_images, mix_ring, indices, &sumout, device),
        _ => gen_simple(&mut rv, in_sk, key_images, in_amounts, mix_ring, indices, &sumout, device)
    };
    sumout.zeroize();
    result?;

    return Ok(rv)
}

//one MLSAG whose commitment row subtracts every output and the fee
fn gen_full<D: Device + ?Sized>(
    rv: &mut RctSignatures,
    in_sk: &[SecretCommitment],
    key_images: &[RistrettoPoint],
    mix_ring: &[Vec<RingMember>],
    indices: &[usize],
    sumout: &Scalar,
    device: &D
) -> Result<(), RctError> {
    let sum_c: RistrettoPoint = rv.out_pk.iter().map(|o| o.mask.0).sum::<RistrettoPoint>()
        + scalarmult_h(rv.txn_fee);

    let pre_mlsag_hash = get_pre_mlsag_hash(rv, mix_ring, device)?;
    rv.p.mgs.push(prove_rct_mg(
        &pre_mlsag_hash,
        &mix_ring[0],
        &in_sk[0],
        &key_images[0],
        sumout,
        &sum_c,
        indices[0],
        device
    )?);
    return Ok(())
}

//one pseudo-output and one MLSAG per input
#[allow(clippy::too_many_arguments)]
fn gen_simple<D: Device + ?Sized>(
    rv: &mut RctSignatures,
    in_sk: &[SecretCommitment],
    key_images: &[RistrettoPoint],
    in_amounts: &[u64],
    mix_ring: &[Vec<RingMember>],
    indices: &[usize],
    sumout: &Scalar,
    device: &D
) -> Result<(), RctError> {
    if in_amounts.len() != in_sk.len() {
        return Err(RctError::InAmountCountMismatch)
    }

    //every blinding factor is random except the last, which balances the outputs
    let last = in_amounts.len() - 1;
    let mut ai: Vec<Scalar> = Vec::with_capacity(in_amounts.len());
    let mut sumpouts = Scalar::zero();
    for _ in 0..last {
        let a = random_scalar();
        sumpouts += a;
        ai.push(a);
    }
    ai.push(sumout - sumpouts);
    sumpouts.zeroize();

    rv.pseudo_outs = in_amounts.iter().zip(&ai)
        .map(|(amount, a)| Commitment::commit(*amount, *a))
        .collect();

    let result = sign_simple_inputs(rv, in_sk, key_images, mix_ring, indices, &ai, device);
    ai.zeroize();
    return result
}

fn sign_simple_inputs<D: Device + ?Sized>(
    rv: &mut RctSignatures,
    in_sk: &[SecretCommitment],
    key_images: &[RistrettoPoint],
    mix_ring: &[Vec<RingMember>],
    indices: &[usize],
    ai: &[Scalar],
    device: &D
) -> Result<(), RctError> {
    let pre_mlsag_hash = get_pre_mlsag_hash(rv, mix_ring, device)?;
    for i in 0..in_sk.len() {
        let mg = prove_rct_mg(
            &pre_mlsag_hash,
            &mix_ring[i],
            &in_sk[i],
            &key_images[i],
            &ai[i],
            &rv.pseudo_outs[i].0,
            indices[i],
            device
        )?;
        rv.p.mgs.push(mg);
    }
    return Ok(())
}
