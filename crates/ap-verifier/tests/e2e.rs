// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Compile → prove → encode → run the generated verifier program.

use ap_circuit::{verify_offchain, CompileOptions, CompiledCircuit, SetupMode, VerifiedProof};
use ap_circuits::ExampleCircuit;
use ap_sdk::codec::{encode_proof, encode_public_inputs};
use ap_types::encoding::{uint_to_be, SCALAR_WIDTH};
use ap_types::{ProofField, ProtocolVariant, SupportedCurve};
use ap_verifier::{build, simulate, Program, Rejection, Verdict};
use ark_std::rand::{rngs::StdRng, SeedableRng};

struct Fixture<C: SupportedCurve> {
    compiled: CompiledCircuit<C>,
    verified: VerifiedProof<C>,
    program: Program,
    proof: Vec<u8>,
    public: Vec<u8>,
}

fn fixture<C: SupportedCurve>(variant: ProtocolVariant) -> Fixture<C> {
    let mut rng = StdRng::seed_from_u64(42);
    let circuit = ExampleCircuit::Pythagorean;
    let compiled = circuit.compile::<C>(SetupMode::TestOnly(&mut rng), CompileOptions { variant }).unwrap();
    let verified = circuit.prove(&compiled, &[3, 4, 5], &mut rng).unwrap();
    let program = build(compiled.verifying_key()).unwrap();
    let proof = encode_proof(&verified.proof);
    let public = encode_public_inputs(&verified.witness).unwrap();
    Fixture { compiled, verified, program, proof, public }
}

fn run<C: SupportedCurve>(f: &Fixture<C>, proof: &[u8], public: &[u8]) -> Verdict {
    simulate::<C>(&f.program, proof, public).unwrap()
}

fn accepts_valid_proof<C: SupportedCurve>(variant: ProtocolVariant) {
    let f = fixture::<C>(variant);
    assert_eq!(f.proof.len(), f.program.proof_len());
    assert_eq!(f.public.len(), 2 * SCALAR_WIDTH);
    assert_eq!(run(&f, &f.proof, &f.public), Verdict::Accepted);
}

fn rejects_forged_input<C: SupportedCurve>(variant: ProtocolVariant) {
    let f = fixture::<C>(variant);
    let mut forged = f.public.clone();
    forged[SCALAR_WIDTH - 1] = 4;
    let verdict = run(&f, &f.proof, &forged);
    assert!(!verdict.is_accepted(), "should fail: a changed to 4");

    let forged_values = vec![C::Fr::from(4u64), C::Fr::from(4u64)];
    assert!(!verify_offchain(f.compiled.verifying_key(), &f.verified.proof, &forged_values));
}

fn rejects_every_mutation<C: SupportedCurve>(variant: ProtocolVariant) {
    let f = fixture::<C>(variant);
    for (field, range) in f.program.layout.entries() {
        for at in [range.start, range.end - 1] {
            let mut proof = f.proof.clone();
            proof[at] ^= 0x01;
            let verdict = run(&f, &proof, &f.public);
            assert!(!verdict.is_accepted(), "{field:?} mutated at byte {at} was accepted");
        }
    }
    for start in (0..f.public.len()).step_by(SCALAR_WIDTH) {
        for at in [start, start + SCALAR_WIDTH - 1] {
            let mut public = f.public.clone();
            public[at] ^= 0x01;
            assert!(!run(&f, &f.proof, &public).is_accepted(), "public input byte {at} mutated was accepted");
        }
    }
}

#[test]
fn test_bn254_folded_accepts() {
    accepts_valid_proof::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
}

#[test]
fn test_bn254_explicit_accepts() {
    accepts_valid_proof::<ark_bn254::Bn254>(ProtocolVariant::ExplicitQuotient);
}

#[test]
fn test_bls12_381_folded_accepts() {
    accepts_valid_proof::<ark_bls12_381::Bls12_381>(ProtocolVariant::FoldedQuotient);
}

#[test]
fn test_bls12_381_explicit_accepts() {
    accepts_valid_proof::<ark_bls12_381::Bls12_381>(ProtocolVariant::ExplicitQuotient);
}

#[test]
fn test_forged_public_input_rejected() {
    rejects_forged_input::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
    rejects_forged_input::<ark_bls12_381::Bls12_381>(ProtocolVariant::FoldedQuotient);
    rejects_forged_input::<ark_bn254::Bn254>(ProtocolVariant::ExplicitQuotient);
    rejects_forged_input::<ark_bls12_381::Bls12_381>(ProtocolVariant::ExplicitQuotient);
}

#[test]
fn test_bn254_mutations_rejected() {
    rejects_every_mutation::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
    rejects_every_mutation::<ark_bn254::Bn254>(ProtocolVariant::ExplicitQuotient);
}

#[test]
fn test_bls12_381_mutations_rejected() {
    rejects_every_mutation::<ark_bls12_381::Bls12_381>(ProtocolVariant::FoldedQuotient);
    rejects_every_mutation::<ark_bls12_381::Bls12_381>(ProtocolVariant::ExplicitQuotient);
}

#[test]
fn test_explicit_quotient_claim_fails_identity() {
    let f = fixture::<ark_bn254::Bn254>(ProtocolVariant::ExplicitQuotient);
    let range = f.program.layout.range(ProofField::QuotientAtZeta).unwrap();
    let mut proof = f.proof.clone();
    proof[range.end - 1] ^= 0x01;
    assert_eq!(run(&f, &proof, &f.public), Verdict::Rejected(Rejection::QuotientIdentity));
}

#[test]
fn test_folded_evaluation_fails_pairing() {
    let f = fixture::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
    let range = f.program.layout.range(ProofField::LAtZeta).unwrap();
    let mut proof = f.proof.clone();
    proof[range.end - 1] ^= 0x01;
    assert_eq!(run(&f, &proof, &f.public), Verdict::Rejected(Rejection::PairingCheck));
}

#[test]
fn test_non_canonical_scalars_rejected() {
    let f = fixture::<ark_bls12_381::Bls12_381>(ProtocolVariant::FoldedQuotient);
    let r = <ark_bls12_381::Bls12_381 as SupportedCurve>::parameters().scalar_modulus;

    let range = f.program.layout.range(ProofField::S1AtZeta).unwrap();
    let mut proof = f.proof.clone();
    proof[range].copy_from_slice(&uint_to_be(&r, SCALAR_WIDTH));
    assert_eq!(run(&f, &proof, &f.public), Verdict::Rejected(Rejection::NonCanonicalProofScalar));

    let mut public = f.public.clone();
    public[SCALAR_WIDTH..].copy_from_slice(&uint_to_be(&r, SCALAR_WIDTH));
    assert_eq!(
        run(&f, &f.proof, &public),
        Verdict::Rejected(Rejection::NonCanonicalPublicInput { index: 1 })
    );
}

#[test]
fn test_wrong_lengths_rejected() {
    let f = fixture::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
    assert_eq!(run(&f, &f.proof[..f.proof.len() - 32], &f.public), Verdict::Rejected(Rejection::LengthMismatch));
    assert_eq!(run(&f, &f.proof, &f.public[..32]), Verdict::Rejected(Rejection::LengthMismatch));
}

#[test]
fn test_cubic_single_public_input() {
    let mut rng = StdRng::seed_from_u64(42);
    let circuit = ExampleCircuit::Cubic;
    let compiled = circuit
        .compile::<ark_bls12_381::Bls12_381>(SetupMode::TestOnly(&mut rng), CompileOptions::default())
        .unwrap();
    let verified = circuit.prove(&compiled, &[3], &mut rng).unwrap();
    let program = build(compiled.verifying_key()).unwrap();
    let proof = encode_proof(&verified.proof);
    let public = encode_public_inputs(&verified.witness).unwrap();
    assert_eq!(public[SCALAR_WIDTH - 1], 35);
    assert_eq!(
        simulate::<ark_bls12_381::Bls12_381>(&program, &proof, &public).unwrap(),
        Verdict::Accepted
    );
}
