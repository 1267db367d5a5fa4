/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::rct::RctType;

///Encoding/serialization errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    #[error("Encoding error.")]
    EncodingError,
    ///Failure to deserialize.
    #[error("Decoding error.")]
    DecodingError,
}

///Errors raised by a signing device, software or hardware.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeviceError {
    ///The device does not implement this operation.
    #[error("Operation not supported by device: {0}")]
    Unsupported(&'static str),
    ///Communication with the device failed.
    #[error("Device transport error: {0}")]
    Transport(String),
    ///A transaction-scoped operation was called without `open_tx`.
    #[error("No transaction is open on the device.")]
    NoOpenTransaction,
}

///Key parsing and key derivation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    ///A scalar or point is not a well-formed 32-byte encoding.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    ///The one-time keys of an output could not be derived.
    #[error("Failed to generate key image: {0}")]
    KeyImageDerivationFailed(&'static str),
    #[error(transparent)]
    Device(#[from] DeviceError),
}

///Ring signature errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    ///The secret column is not inside the key matrix.
    #[error("Index {index} out of range for a ring of {cols} columns.")]
    IndexOutOfRange { index: usize, cols: usize },
    #[error(transparent)]
    Device(#[from] DeviceError),
}

///RingCT assembly, verification and decoding errors.
///
///These are caller contract violations.
///A signature which simply fails to verify is reported as `Ok(false)`, never as one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RctError {
    ///`amount_keys` and `out_amounts` differ in length.
    #[error("Different number of amounts/amount keys.")]
    AmountKeyCountMismatch,
    ///`destinations` and `out_amounts` differ in length.
    #[error("Different number of destinations/amounts.")]
    DestinationCountMismatch,
    ///The real index of input `input` is outside of its ring.
    #[error("Bad mix ring/index size for input {input}.")]
    RingIndexOutOfRange { input: usize },
    ///`mix_ring` and `in_sk` differ in length.
    #[error("Mismatched mix ring/input secrets.")]
    RingCountMismatch,
    ///`indices` and `in_sk` differ in length.
    #[error("Mismatched indices/input secrets.")]
    IndexCountMismatch,
    ///`key_images` and `in_sk` differ in length.
    #[error("Mismatched key images/input secrets.")]
    KeyImageCountMismatch,
    ///`in_amounts` and `in_sk` differ in length.
    #[error("Mismatched input amounts/input secrets.")]
    InAmountCountMismatch,
    ///Two parts of an `RctSignatures` which must be the same length are not.
    #[error("Mismatched sizes: {0}.")]
    MismatchedLengths(&'static str),
    ///An operation for one signature type was called on another.
    #[error("Expected {expected:?} signature, got {found:?}.")]
    WrongType { expected: RctType, found: RctType },
    ///Bulletproof-typed signatures are not handled by this crate.
    #[error("Unsupported signature type {0:?}.")]
    UnsupportedType(RctType),
    ///The requested output does not exist.
    #[error("Bad output index {index}.")]
    OutputIndexOutOfRange { index: usize },
    ///The decoded amount and mask do not open the output commitment.
    #[error("Amount decoded incorrectly, will be unable to spend.")]
    AmountDecodeMismatch,
    #[error(transparent)]
    Signature(#[from] SignatureError),
    #[error(transparent)]
    Device(#[from] DeviceError),
}
