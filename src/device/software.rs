/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zeroize::Zeroize;

use crate::internal_common::*;
use crate::address::KeyDerivation;
use crate::ecdh::{self, EcdhTuple};
use crate::signature::hash_mlsag_round;
use crate::rct::hash_pre_mlsag;
use super::{Device, DeviceMode, MlsagNonce};

///A device which keeps every secret in host memory.
#[derive(Default)]
pub struct SoftwareDevice {
    mode: DeviceMode,
    tx_key: Option<Scalar>,

} impl SoftwareDevice {
    pub fn new() -> Self {
        return Self::default()
    }

    pub fn mode(&self) -> DeviceMode {
        return self.mode
    }

} impl std::fmt::Debug for SoftwareDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_struct("SoftwareDevice")
            .field("mode", &self.mode)
            .field("tx_open", &self.tx_key.is_some())
            .finish()
    }

} impl Drop for SoftwareDevice {
    fn drop(&mut self) {
        self.tx_key.zeroize();
    }
}

impl Device for SoftwareDevice {
    fn name(&self) -> &str {
        return "software"
    }

    fn set_mode(&mut self, mode: DeviceMode) -> Result<(), DeviceError> {
        tracing::debug!(device = self.name(), ?mode, "set device mode");
        self.mode = mode;
        return Ok(())
    }

    fn open_tx(&mut self) -> Result<Scalar, DeviceError> {
        let tx_key = random_scalar();
        self.tx_key = Some(tx_key);
        return Ok(tx_key)
    }

    fn close_tx(&mut self) -> Result<(), DeviceError> {
        return match self.tx_key.take() {
            Some(mut tx_key) => {
                tx_key.zeroize();
                Ok(())
            },
            None => Err(DeviceError::NoOpenTransaction)
        }
    }

    fn verify_keys(&self, secret: &Scalar, public: &RistrettoPoint) -> Result<bool, DeviceError> {
        return Ok(&(secret * G) == public)
    }

    fn scalarmult_base(&self, scalar: &Scalar) -> Result<RistrettoPoint, DeviceError> {
        return Ok(scalar * G)
    }

    fn scalarmult_key(&self, point: &RistrettoPoint, scalar: &Scalar) -> Result<RistrettoPoint, DeviceError> {
        return Ok(scalar * point)
    }

    fn generate_key_derivation(&self, public: &RistrettoPoint, secret: &Scalar) -> Result<KeyDerivation, DeviceError> {
        return Ok(KeyDerivation::generate(public, secret))
    }

    fn derivation_to_scalar(&self, derivation: &KeyDerivation, output_index: u64) -> Result<Scalar, DeviceError> {
        return Ok(derivation.to_scalar(output_index))
    }

    fn derive_public_key(
        &self, derivation: &KeyDerivation, output_index: u64, base: &RistrettoPoint
    ) -> Result<RistrettoPoint, DeviceError> {
        return Ok(derivation.derive_public_key(output_index, base))
    }

    fn derive_secret_key(
        &self, derivation: &KeyDerivation, output_index: u64, base: &Scalar
    ) -> Result<Scalar, DeviceError> {
        return Ok(derivation.derive_secret_key(output_index, base))
    }

    fn generate_key_image(&self, public: &RistrettoPoint, secret: &Scalar) -> Result<RistrettoPoint, DeviceError> {
        return Ok(secret * h_key_image_point(public))
    }

    fn ecdh_encode(&self, unmasked: &EcdhTuple, shared_key: &Scalar) -> Result<EcdhTuple, DeviceError> {
        return Ok(ecdh::encode_ecdh(unmasked, shared_key))
    }

    fn ecdh_decode(&self, masked: &EcdhTuple, shared_key: &Scalar) -> Result<EcdhTuple, DeviceError> {
        return Ok(ecdh::decode_ecdh(masked, shared_key))
    }

    #[allow(unused_variables)]
    fn mlsag_prehash(
        &self,
        serialized_base: &[u8],
        inputs: usize,
        outputs: usize,
        hashes: &[[u8; 32]; 3],
        out_pk: &[RingMember],
    ) -> Result<[u8; 32], DeviceError> {
        return Ok(hash_pre_mlsag(hashes))
    }

    #[allow(unused_variables)]
    fn mlsag_prepare(&self, hashed_point: &RistrettoPoint, secret: &Scalar) -> Result<MlsagNonce, DeviceError> {
        let a = random_scalar();
        return Ok(MlsagNonce {
            a,
            a_g: &a * G,
            a_hp: a * hashed_point
        })
    }

    fn mlsag_hash(&self, to_hash: &[[u8; 32]; 6]) -> Result<Scalar, DeviceError> {
        return Ok(hash_mlsag_round(to_hash))
    }

    #[allow(unused_variables)]
    fn mlsag_sign(
        &self,
        challenge: &Scalar,
        secrets: &[Scalar; MLSAG_ROWS],
        nonces: &[Scalar; MLSAG_ROWS],
        ds_rows: usize,
    ) -> Result<[Scalar; MLSAG_ROWS], DeviceError> {
        let mut responses = [Scalar::zero(); MLSAG_ROWS];
        for j in 0..MLSAG_ROWS {
            responses[j] = nonces[j] - (challenge * secrets[j]);
        }
        return Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_key_lifecycle() {
        let mut device = SoftwareDevice::new();
        assert_eq!(device.close_tx(), Err(DeviceError::NoOpenTransaction));

        device.set_mode(DeviceMode::TransactionCreateReal).unwrap();
        assert_eq!(device.mode(), DeviceMode::TransactionCreateReal);

        let tx_key = device.open_tx().unwrap();
        assert!(device.verify_keys(&tx_key, &(&tx_key * G)).unwrap());
        device.close_tx().unwrap();
        assert_eq!(device.close_tx(), Err(DeviceError::NoOpenTransaction));
    }

    #[test]
    fn mlsag_nonce_is_wiped() {
        let device = SoftwareDevice::new();
        let secret = random_scalar();
        let hp = h_key_image_point(&(&secret * G));

        let mut nonce = device.mlsag_prepare(&hp, &secret).unwrap();
        assert_eq!(&nonce.a * G, nonce.a_g);
        assert_eq!(nonce.a * hp, nonce.a_hp);

        nonce.zeroize();
        assert_eq!(nonce.a, Scalar::zero());
    }

    #[test]
    fn mlsag_sign_closes_schnorr_equation() {
        let device = SoftwareDevice::new();
        let secrets = [random_scalar(), random_scalar()];
        let nonces = [random_scalar(), random_scalar()];
        let c = random_scalar();

        let s = device.mlsag_sign(&c, &secrets, &nonces, 1).unwrap();
        for j in 0..MLSAG_ROWS {
            assert_eq!(&s[j] * G + c * (&secrets[j] * G), &nonces[j] * G);
        }
    }
}
