/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ring Confidential Transactions.
//!
//! `gen_rct` hides every output amount behind a commitment with a rangeproof,
//! and proves with MLSAGs that the inputs are real, unspent, and balance the outputs plus the fee.
//!
//! There are two layouts:
//! * `RctType::Full`, for a single input: one MLSAG whose commitment row is
//!   `ring.mask - (sum(out_pk.mask) + fee * H)`, tying the outputs and fee to the input directly.
//! * `RctType::Simple`, for several inputs: every input gets a pseudo-output commitment
//!   to its own amount and an MLSAG against it, and the pseudo-outputs must sum to the outputs plus fee.

mod serialization;
mod generate;
mod verify;
mod decode;

pub use serialization::{
    serialize_rct_base,
    serialize_range_proofs,
    get_pre_mlsag_hash,
    hash_pre_mlsag
};
pub use generate::gen_rct;
pub use verify::{
    ver_rct,
    ver_rct_simple
};
pub use decode::{
    decode_rct,
    decode_rct_simple,
    DecodedAmount
};

use crate::internal_common::*;
use crate::ecdh::EcdhTuple;
use crate::rangeproof::RangeSignature;
use crate::signature::MlsagSignature;

///RingCT signature layouts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[repr(u8)]
pub enum RctType {
    Null = 0,
    Full = 1,
    Simple = 2,
    ///Bulletproof rangeproofs are not supported.
    FullBulletproof = 3,
    ///Bulletproof rangeproofs are not supported.
    SimpleBulletproof = 4,
}

///The prunable part of a RingCT signature: the proofs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RctPrunable {
    ///One per output.
    pub range_sigs: Vec<RangeSignature>,
    ///One for `Full`, one per input for `Simple`.
    pub mgs: Vec<MlsagSignature>,
}

///A complete RingCT signature.
///
///This crate does not define the wire encoding of this structure,
///only the values which have to be serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RctSignatures {
    pub rct_type: RctType,
    ///Hash of the transaction prefix.
    pub message: [u8; 32],
    ///Destination key and amount commitment of every output.
    pub out_pk: Vec<RingMember>,
    pub p: RctPrunable,
    ///Blinded `(mask, amount)` of every output.
    pub ecdh_info: Vec<EcdhTuple>,
    pub txn_fee: u64,
    ///Only used by `Simple` signatures.
    pub pseudo_outs: Vec<Commitment>,

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RctSignatures {}

///Estimate the size in bytes of a transaction with Borromean rangeproofs,
///given its number of inputs, ring size minus one (`mixin`) and number of outputs.
pub fn estimate_rct_size(inputs: usize, mixin: usize, outputs: usize) -> usize {
    let mut size = 0;
    //tx prefix
    size += 1 + 6;
    //vin, key offsets are variable size so 3 bytes per ring member is a best guess
    size += inputs * (1 + 6 + (mixin + 1) * 3 + 32);
    //vout
    size += outputs * (6 + 32);
    //extra
    size += 40;

    //rct signatures
    //type
    size += 1;
    //range sigs
    size += (2 * 64 * 32 + 32 + 64 * 32) * outputs;
    //MGs
    size += inputs * (32 * (mixin + 1) + 32);
    //pseudo outs
    size += 32 * inputs;
    //ecdh info
    size += 2 * 32 * outputs;
    //out pk, only the commitment is saved
    size += 32 * outputs;
    //fee
    size += 4;

    return size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_estimate() {
        assert_eq!(estimate_rct_size(0, 0, 0), 1 + 6 + 40 + 1 + 4);
        //1 input, ring size 11, 2 outputs
        assert_eq!(estimate_rct_size(1, 10, 2), 13160);
        assert!(estimate_rct_size(2, 10, 2) > estimate_rct_size(1, 10, 2));
    }
}
