// SPDX short identifier: Unlicense

use borromean_rct::{
    curve::{
        Scalar,
        HexKey,
        random_scalar
    },
    pedersen::{
        commit_hex,
        zero_commit
    },
    Commitment,
};

fn main() {
    //Value of the Pedersen commitment, in atomic units
    let value: u64 = 123;
    //Blinding factor ("mask") of the Pedersen commitment
    let blinding: Scalar = random_scalar();

    //Create a commitment
    let commitment = Commitment::commit(value, blinding);

    //Create another commitment with the same blinding factor, but different value
    let commitment2 = Commitment::commit(120, blinding);

    //Difference between the values, ie a fee
    let extra = 123 - 120;
    //Verify that the "equation" is balanced: c1 == c2 + extra.
    //Both the values and blinding factors must be perfectly balanced on each side.
    assert!(Commitment::is_balanced(&[commitment], &[commitment2], extra));


    //Three pseudo-outputs paying for two outputs and a fee:
    let in_blinding_1 = random_scalar();
    let in_blinding_2 = random_scalar();
    let in_blinding_3 = random_scalar();

    let out_blinding_1 = random_scalar();
    let out_blinding_2 = (in_blinding_1 + in_blinding_2 + in_blinding_3) - out_blinding_1;

    let ins = [
        Commitment::commit(100_000, in_blinding_1),
        Commitment::commit(50_000, in_blinding_2),
        Commitment::commit(200_000, in_blinding_3)
    ];
    let outs = [
        Commitment::commit(175_000, out_blinding_1),
        Commitment::commit(150_000, out_blinding_2)
    ];

    assert!(Commitment::is_balanced(&ins, &outs, 25_000));


    //Commitments can be built from hex keys, ie when they come from another program
    let amount_hex = Scalar::from(123u64).to_hex();
    let from_hex = commit_hex(&amount_hex, &blinding.to_hex())
        .expect("Real software should have proper error handling.");
    assert_eq!(from_hex, commitment);
    assert!(commit_hex("not hex", &blinding.to_hex()).is_err());

    //Public amounts use the identity mask, so anyone can recompute their commitment
    assert_eq!(zero_commit(value), Commitment::commit(value, Scalar::one()));
}
