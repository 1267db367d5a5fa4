/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use crate::internal_common::*;
use crate::device::Device;
use super::{AccountKeys, AccountPublic, generate_key_image_helper};

type WalletId = [u8; 64];
type OutputId = ([u8; 32], u64);

fn wallet_id(public: &AccountPublic) -> WalletId {
    let mut id = [0u8; 64];
    id[..32].copy_from_slice(&encode_point(&public.view));
    id[32..].copy_from_slice(&encode_point(&public.spend));
    return id
}

///Memoized key images, keyed by wallet and then by `(tx_pub_key, out_index)`.
///
///This is owned by whoever scans for outputs; it is never shared implicitly.
///Entries computed for one wallet are never returned for another.
#[derive(Debug, Default)]
pub struct KeyImageCache {
    wallets: HashMap<WalletId, HashMap<OutputId, RistrettoPoint>>,

} impl KeyImageCache {
    pub fn new() -> Self {
        return Self::default()
    }

    ///Return the cached key image, if any.
    pub fn get(&self, wallet: &AccountPublic, tx_pub_key: &CompressedRistretto, out_index: u64) -> Option<RistrettoPoint> {
        return self.wallets.get(&wallet_id(wallet))?
            .get(&(tx_pub_key.to_bytes(), out_index))
            .copied()
    }

    ///Return the key image of an output, deriving and caching it on first use.
    pub fn get_or_derive<D: Device + ?Sized>(
        &mut self,
        keys: &AccountKeys,
        tx_pub_key: &CompressedRistretto,
        out_index: u64,
        device: &D
    ) -> Result<RistrettoPoint, KeyError> {
        let outputs = self.wallets.entry(wallet_id(&keys.to_public())).or_default();
        let output_id = (tx_pub_key.to_bytes(), out_index);
        if let Some(key_image) = outputs.get(&output_id) {
            return Ok(*key_image)
        }

        let key_image = generate_key_image_helper(keys, tx_pub_key, out_index, None, device)?.key_image;
        outputs.insert(output_id, key_image);
        return Ok(key_image)
    }

    ///Forget every key image of a wallet.
    pub fn clear_wallet(&mut self, wallet: &AccountPublic) {
        self.wallets.remove(&wallet_id(wallet));
    }
}
