/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! CryptoNote-style account keys, one-time output keys and key images.

mod derivation;
mod key_image;
mod cache;

use zeroize::Zeroize;

use crate::internal_common::*;

pub use derivation::KeyDerivation;
pub(crate) use derivation::encode_varint;
pub use key_image::{
    generate_key_image,
    generate_key_image_helper,
    InEphemeral,
    KeyImageHelperResult
};
pub use cache::KeyImageCache;

///A public key and its private key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyPair {
    pub public: RistrettoPoint,
    pub secret: Scalar

} impl KeyPair {
    ///Generate a random new key pair.
    pub fn generate() -> Self {
        return Self::from_secret(random_scalar())
    }

    pub fn from_secret(secret: Scalar) -> Self {
        return Self {
            public: &secret * G,
            secret
        }
    }

} impl Zeroize for KeyPair {
    fn zeroize(&mut self) {
        self.secret.zeroize();
    }

} impl Drop for KeyPair {
    fn drop(&mut self) {
        self.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for KeyPair {}

///View and spend keys of a wallet.
///
///These keys can view *and* spend funds sent to this wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountKeys {
    pub view: KeyPair,
    pub spend: KeyPair

} impl AccountKeys {
    ///Generate a random new wallet.
    pub fn generate() -> Self {
        return Self {
            view: KeyPair::generate(),
            spend: KeyPair::generate()
        }
    }

    ///Convert these keys into a public address.
    pub fn to_public(&self) -> AccountPublic {
        return AccountPublic {
            view: self.view.public,
            spend: self.spend.public
        }
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for AccountKeys {}

///Public view and spend keys of a wallet (its address).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountPublic {
    pub view: RistrettoPoint,
    pub spend: RistrettoPoint

} impl AccountPublic {
    ///"Send" output `output_index` of a transaction with secret key `tx_secret` to this address.
    ///
    ///Returns the one-time public key of the output (its destination)
    ///and the amount key which blinds its ECDH tuple.
    pub fn derive_output(&self, tx_secret: &Scalar, output_index: u64) -> (RistrettoPoint, Scalar) {
        let derivation = KeyDerivation::generate(&self.view, tx_secret);
        return (
            derivation.derive_public_key(output_index, &self.spend),
            derivation.to_scalar(output_index)
        )
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for AccountPublic {}
