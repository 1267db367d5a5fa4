/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zeroize::Zeroize;

use crate::internal_common::*;
use crate::device::Device;
use crate::ecdh::decode_mask;
use super::AccountKeys;

///Given a one-time private key, return its key image: `x * Hp(x * G)`.
pub fn generate_key_image(secret: &Scalar) -> RistrettoPoint {
    let public = secret * G;
    return secret * h_key_image_point(&public)
}

///The one-time keys of an owned output, ready to be spent.
/// * `public`: the output's one-time public key
/// * `secret`: its private key
/// * `mask`: the blinding factor of the output's commitment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InEphemeral {
    pub public: RistrettoPoint,
    pub secret: Scalar,
    pub mask: Scalar

} impl InEphemeral {
    ///The secrets needed to sign for this output in a ring.
    pub fn to_secret_commitment(&self) -> SecretCommitment {
        return SecretCommitment::new(self.secret, self.mask)
    }

} impl Zeroize for InEphemeral {
    fn zeroize(&mut self) {
        self.secret.zeroize();
        self.mask.zeroize();
    }

} impl Drop for InEphemeral {
    fn drop(&mut self) {
        self.zeroize()
    }
}

///Result of `generate_key_image_helper`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyImageHelperResult {
    pub in_ephemeral: InEphemeral,
    pub key_image: RistrettoPoint
}

///Derive the one-time keys and key image of output `out_index` of a transaction.
///
///`encrypted_mask` is the blinded commitment mask of a confidential output,
///or `None` for an output whose commitment uses the identity mask.
///
///Fails with `KeyError::KeyImageDerivationFailed` if `tx_pub_key` is not a usable point.
pub fn generate_key_image_helper<D: Device + ?Sized>(
    keys: &AccountKeys,
    tx_pub_key: &CompressedRistretto,
    out_index: u64,
    encrypted_mask: Option<&Scalar>,
    device: &D
) -> Result<KeyImageHelperResult, KeyError> {
    let tx_pub_key = tx_pub_key.decompress()
        .ok_or(KeyError::KeyImageDerivationFailed("transaction public key is not a valid point"))?;

    let derivation = device.generate_key_derivation(&tx_pub_key, &keys.view.secret)?;
    if !derivation.is_usable() {
        return Err(KeyError::KeyImageDerivationFailed("key derivation is the identity"))
    }

    let mask = match encrypted_mask {
        Some(encrypted_mask) => {
            let amount_key = device.derivation_to_scalar(&derivation, out_index)?;
            decode_mask(encrypted_mask, &amount_key)
        },
        None => Scalar::one()
    };

    let public = device.derive_public_key(&derivation, out_index, &keys.spend.public)?;
    let secret = device.derive_secret_key(&derivation, out_index, &keys.spend.secret)?;
    let key_image = device.generate_key_image(&public, &secret)?;

    return Ok(KeyImageHelperResult {
        in_ephemeral: InEphemeral { public, secret, mask },
        key_image
    })
}
