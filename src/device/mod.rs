/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Signing devices.
//!
//! Every operation that touches a spend secret, a view secret or a signing nonce goes through a `Device`,
//! so that the same signing code can run against keys held in memory (`SoftwareDevice`)
//! or against a hardware wallet which never reveals them.
//!
//! A device is always passed explicitly to the functions which need one;
//! there is no global or default device.
//!
//! Hardware implementations may block on I/O inside any of these calls.
//! Nothing here imposes a timeout, so callers talking to real hardware should wrap signing in their own.

mod software;

use zeroize::Zeroize;

pub use software::SoftwareDevice;

use crate::internal_common::*;
use crate::address::KeyDerivation;
use crate::ecdh::EcdhTuple;

///What the device is currently being used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceMode {
    ///No transaction is being built.
    #[default]
    None,
    ///Building a transaction which will be broadcast.
    TransactionCreateReal,
    ///Building a throwaway transaction, ie for fee estimation.
    TransactionCreateFake,
}

///The nonce committed to for the secret column of an MLSAG.
/// * `a`: the nonce
/// * `a_g`: `a * G`
/// * `a_hp`: `a * Hp(P)`
#[derive(Debug, Clone)]
pub struct MlsagNonce {
    pub a: Scalar,
    pub a_g: RistrettoPoint,
    pub a_hp: RistrettoPoint,

} impl Zeroize for MlsagNonce {
    fn zeroize(&mut self) {
        self.a.zeroize();
    }

} impl Drop for MlsagNonce {
    fn drop(&mut self) {
        self.zeroize()
    }
}

///Capabilities consumed by the signing code.
///
///Any implementation honoring these contracts is interchangeable with `SoftwareDevice`.
pub trait Device {
    ///Human readable name, for logs.
    fn name(&self) -> &str;

    fn set_mode(&mut self, mode: DeviceMode) -> Result<(), DeviceError>;

    ///Begin a transaction, returning a fresh transaction secret key.
    fn open_tx(&mut self) -> Result<Scalar, DeviceError>;

    ///End the transaction started with `open_tx`, forgetting its secret key.
    fn close_tx(&mut self) -> Result<(), DeviceError>;

    ///Check that `public == secret * G`.
    fn verify_keys(&self, secret: &Scalar, public: &RistrettoPoint) -> Result<bool, DeviceError>;

    fn scalarmult_base(&self, scalar: &Scalar) -> Result<RistrettoPoint, DeviceError>;

    fn scalarmult_key(&self, point: &RistrettoPoint, scalar: &Scalar) -> Result<RistrettoPoint, DeviceError>;

    fn generate_key_derivation(&self, public: &RistrettoPoint, secret: &Scalar) -> Result<KeyDerivation, DeviceError>;

    fn derivation_to_scalar(&self, derivation: &KeyDerivation, output_index: u64) -> Result<Scalar, DeviceError>;

    fn derive_public_key(
        &self, derivation: &KeyDerivation, output_index: u64, base: &RistrettoPoint
    ) -> Result<RistrettoPoint, DeviceError>;

    fn derive_secret_key(
        &self, derivation: &KeyDerivation, output_index: u64, base: &Scalar
    ) -> Result<Scalar, DeviceError>;

    ///`secret * Hp(public)`
    fn generate_key_image(&self, public: &RistrettoPoint, secret: &Scalar) -> Result<RistrettoPoint, DeviceError>;

    fn ecdh_encode(&self, unmasked: &EcdhTuple, shared_key: &Scalar) -> Result<EcdhTuple, DeviceError>;

    fn ecdh_decode(&self, masked: &EcdhTuple, shared_key: &Scalar) -> Result<EcdhTuple, DeviceError>;

    ///Combine the message, base and rangeproof hashes into the message signed by every MLSAG.
    ///
    ///`serialized_base`, the counts and `out_pk` are provided so that a hardware device can
    ///display and confirm what it is signing; the software device only hashes `hashes`.
    fn mlsag_prehash(
        &self,
        serialized_base: &[u8],
        inputs: usize,
        outputs: usize,
        hashes: &[[u8; 32]; 3],
        out_pk: &[RingMember],
    ) -> Result<[u8; 32], DeviceError>;

    ///Pick the nonce for the linkable row of the secret column.
    fn mlsag_prepare(&self, hashed_point: &RistrettoPoint, secret: &Scalar) -> Result<MlsagNonce, DeviceError>;

    ///Hash one MLSAG round: `[message, pubkey, ds_L, ds_R, commitment, nds_L]`.
    fn mlsag_hash(&self, to_hash: &[[u8; 32]; 6]) -> Result<Scalar, DeviceError>;

    ///Close the ring: `s[j] = nonces[j] - challenge * secrets[j]` for every row.
    ///
    ///The first `ds_rows` rows are linkable.
    fn mlsag_sign(
        &self,
        challenge: &Scalar,
        secrets: &[Scalar; MLSAG_ROWS],
        nonces: &[Scalar; MLSAG_ROWS],
        ds_rows: usize,
    ) -> Result<[Scalar; MLSAG_ROWS], DeviceError>;
}
