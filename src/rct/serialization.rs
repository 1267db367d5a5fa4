/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The bytes bound into every MLSAG, so that no part of a RingCT signature can be changed after signing.

use crate::internal_common::*;
use crate::address::encode_varint;
use crate::device::Device;
use super::{RctSignatures, RctType};

///Serialize the non-prunable fields: type, fee, pseudo-outputs (`Simple` only),
///ECDH info, and output commitments.
pub fn serialize_rct_base(rv: &RctSignatures) -> Vec<u8> {
    let mut out: Vec<u8> = vec!(rv.rct_type as u8);
    encode_varint(rv.txn_fee, &mut out);

    if rv.rct_type == RctType::Simple {
        let pseudo_outs: Vec<RistrettoPoint> = rv.pseudo_outs.iter().map(|c| c.0).collect();
        out.extend(batch_encode_points(&pseudo_outs).concat());
    }
    for ecdh in &rv.ecdh_info {
        out.extend(ecdh.mask.as_bytes());
        out.extend(ecdh.amount.as_bytes());
    }
    let out_commitments: Vec<RistrettoPoint> = rv.out_pk.iter().map(|o| o.mask.0).collect();
    out.extend(batch_encode_points(&out_commitments).concat());

    return out
}

///Serialize every rangeproof: `C_i`, then `s0`, `s1` and `ee` of each.
pub fn serialize_range_proofs(rv: &RctSignatures) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    for range_sig in &rv.p.range_sigs {
        let ci: Vec<RistrettoPoint> = range_sig.ci.iter().map(|c| c.0).collect();
        out.extend(batch_encode_points(&ci).concat());
        for s in range_sig.bsig.s0.iter().chain(range_sig.bsig.s1.iter()) {
            out.extend(s.as_bytes());
        }
        out.extend(range_sig.bsig.ee.as_bytes());
    }
    return out
}

///Combine `[message, H(base), H(rangeproofs)]` into the message signed by every MLSAG.
///
///Devices must compute `mlsag_prehash` exactly like this,
///since verification does not go through a device.
pub fn hash_pre_mlsag(hashes: &[[u8; 32]; 3]) -> [u8; 32] {
    return domain_h_bytes(&hashes.concat(), domains::MLSAG_PREHASH)
}

//serialized base, and the 3 hashes combined into the pre-MLSAG hash
pub(crate) fn pre_mlsag_hashes(rv: &RctSignatures) -> (Vec<u8>, [[u8; 32]; 3]) {
    let base = serialize_rct_base(rv);
    let hashes = [
        rv.message,
        domain_h_bytes(&base, domains::RCT_BASE),
        domain_h_bytes(&serialize_range_proofs(rv), domains::RCT_RANGE_PROOFS)
    ];
    return (base, hashes)
}

///Compute the message signed by every MLSAG of `rv` on `device`.
///
///This must be called after the outputs, ECDH info, rangeproofs and pseudo-outputs are all set.
pub fn get_pre_mlsag_hash<D: Device + ?Sized>(
    rv: &RctSignatures, mix_ring: &[Vec<RingMember>], device: &D
) -> Result<[u8; 32], DeviceError> {
    let (base, hashes) = pre_mlsag_hashes(rv);
    let inputs = match rv.rct_type {
        RctType::Simple => mix_ring.len(),
        _ => mix_ring.first().map_or(0, |ring| ring.len())
    };
    return device.mlsag_prehash(&base, inputs, rv.ecdh_info.len(), &hashes, &rv.out_pk)
}
