/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!RingCT-related ring signatures
//!
//!Given a key matrix with one column per ring member, an MLSAG proves that:
//! 1. the signer knows the private key of every row of one column, without revealing which
//! 2. the key image is correct for the one-time key of that column (so it can be spent only once)

mod mlsag;
mod signature_utils;

pub use mlsag::MlsagSignature;
pub use signature_utils::{
    MLSAG_ROWS,
    KeyColumn,
    hash_mlsag_round
};
