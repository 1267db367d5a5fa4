/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

use crate::errors::KeyError;
#[cfg(feature = "to_bytes")]
use crate::errors::SerializationError;
#[cfg(feature = "to_bytes")]
use crate::tobytes::*;

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    ristretto::{
        RistrettoPoint,
        CompressedRistretto,
        RistrettoBasepointTable,
        VartimeRistrettoPrecomputation
    },
    traits::{
        Identity,
        IsIdentity,
        MultiscalarMul,
        VartimeMultiscalarMul,
        VartimePrecomputedMultiscalarMul
    }
};
use rand::{thread_rng, Rng};

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &RistrettoBasepointTable = &constants::RISTRETTO_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: RistrettoPoint = constants::RISTRETTO_BASEPOINT_POINT;

lazy_static! {
    pub(crate) static ref G_MULTISCALAR_MUL: VartimeRistrettoPrecomputation = VartimeRistrettoPrecomputation::new(vec!(G_POINT));
}

///Encode a point to byte array for hashing purposes.
///
///This is the canonical compressed encoding,
///so it is also what `to_hex` and `ToBytes` produce.
pub fn encode_point(point: &RistrettoPoint) -> [u8; 32] {
    return point.compress().to_bytes()
}

///Efficient batch encoding for multiple points to byte arrays for hashing purposes.
///
///Though possible, this is not intended to be reversible:
///if you wish to "decode" back to a point,
///then use the methods provided by `ToBytes` instead.
///Note that `batch_encode_points` returns different bytes than `encode_point` for the same point,
///so a hash must always be computed with the same one of the two.
pub fn batch_encode_points(points: &[RistrettoPoint]) -> Vec<[u8; 32]> {
    let mut encoded: Vec<[u8; 32]> = Vec::with_capacity(points.len());
    for point in RistrettoPoint::double_and_compress_batch(points) {
        encoded.push(point.to_bytes());
    }
    return encoded
}

///`(a * G) + (b * B)`, variable time.
///Only use this on public values.
pub(crate) fn vartime_add_keys2(a: &Scalar, b: &Scalar, big_b: &RistrettoPoint) -> RistrettoPoint {
    return G_MULTISCALAR_MUL.vartime_mixed_multiscalar_mul(vec!(*a), vec!(*b), vec!(*big_b))
}

///return a random scalar
pub fn random_scalar() -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    thread_rng().fill(&mut scalar_bytes[..]);
    return Scalar::from_bytes_mod_order_wide(&scalar_bytes);
}

///return a random point on the curve
pub fn random_point() -> RistrettoPoint {
    return &random_scalar() * G;
}

///Convert a `u64` amount to a scalar (little-endian, as stored in ECDH tuples).
pub fn amount_to_scalar(amount: u64) -> Scalar {
    return Scalar::from(amount)
}

///Convert a scalar back into a `u64` amount.
///
///Returns `None` if the scalar does not fit in 64 bits.
pub fn scalar_to_amount(scalar: &Scalar) -> Option<u64> {
    let bytes = scalar.to_bytes();
    if bytes[8..].iter().any(|b| *b != 0) {
        return None
    }
    return Some(u64::from_le_bytes(bytes[0..8].try_into().ok()?))
}

fn key_bytes_from_hex(hex_key: &str) -> Result<[u8; 32], KeyError> {
    if hex_key.len() != 64 {
        return Err(KeyError::InvalidInput(
            format!("expected 64 hex characters, got {}", hex_key.len())))
    }
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(hex_key, &mut bytes)
        .map_err(|e| KeyError::InvalidInput(e.to_string()))?;
    return Ok(bytes)
}

///Conversion to and from the canonical 64-character hexadecimal form of a key.
pub trait HexKey: Sized {
    fn to_hex(&self) -> String;

    fn from_hex(hex_key: &str) -> Result<Self, KeyError>;
}

impl HexKey for Scalar {
    fn to_hex(&self) -> String {
        return hex::encode(self.reduce().to_bytes())
    }

    fn from_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes = key_bytes_from_hex(hex_key)?;
        return Scalar::from_canonical_bytes(bytes)
            .ok_or_else(|| KeyError::InvalidInput(format!("non-canonical scalar {hex_key}")))
    }
}

impl HexKey for RistrettoPoint {
    fn to_hex(&self) -> String {
        return hex::encode(encode_point(self))
    }

    fn from_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes = key_bytes_from_hex(hex_key)?;
        return CompressedRistretto(bytes).decompress()
            .ok_or_else(|| KeyError::InvalidInput(format!("not a valid point {hex_key}")))
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Scalar {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.reduce().to_bytes().to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(bytes) => {
                match Scalar::from_canonical_bytes(bytes) {
                    Some(scalar) => Ok(scalar),
                    None => Err(SerializationError::DecodingError)
                }
            },
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for RistrettoPoint {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.compress().to_bytes().to_vec());
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 32 {
            return Err(SerializationError::DecodingError)
        }

        return match CompressedRistretto::from_slice(bytes).decompress() {
            Some(point) => Ok(point),
            None => Err(SerializationError::DecodingError)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_keys_round_trip_and_reject_garbage() {
        let scalar = random_scalar();
        assert_eq!(Scalar::from_hex(&scalar.to_hex()).unwrap(), scalar);

        let point = random_point();
        assert_eq!(RistrettoPoint::from_hex(&point.to_hex()).unwrap(), point);

        assert!(Scalar::from_hex("abcd").is_err());
        assert!(Scalar::from_hex(&"zz".repeat(32)).is_err());
        //2^256 - 1 is not a canonical scalar
        assert!(Scalar::from_hex(&"ff".repeat(32)).is_err());
        assert!(RistrettoPoint::from_hex(&"ff".repeat(32)).is_err());
    }

    #[test]
    fn amounts_fit_in_scalars() {
        for amount in [0u64, 1, 6000, u64::MAX] {
            assert_eq!(scalar_to_amount(&amount_to_scalar(amount)), Some(amount));
        }
        let too_big = amount_to_scalar(u64::MAX) + Scalar::one();
        assert_eq!(scalar_to_amount(&too_big), None);
    }
}
