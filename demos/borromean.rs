// SPDX short identifier: Unlicense

use borromean_rct::{
    Commitment,
    rangeproof::{
        RangeSignature,
        BIT_RANGE
    }
};

fn main() {
    //Value of the commitment, in atomic units
    let value: u64 = 123;

    //Commit to the value, and prove that it fits in BIT_RANGE bits.
    //The blinding factor is chosen by the prover: it is the sum of the blinding factors of every bit.
    let proven = RangeSignature::prove(value);
    assert_eq!(proven.signature.ci.len(), BIT_RANGE);
    assert_eq!(proven.commitment, Commitment::commit(value, proven.mask));

    //Verify
    assert!(proven.signature.verify(&proven.commitment));

    //The proof is bound to its commitment
    let other = RangeSignature::prove(value);
    assert!(!proven.signature.verify(&other.commitment));
}
