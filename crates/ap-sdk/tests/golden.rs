// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Byte-exact layout of a fixed BN254 proof: every point is the generator
//! `(1, 2)` and the scalars are 1..=6 in layout order.

use ap_sdk::{decode_proof, encode_proof};
use ap_types::{Proof, ProtocolVariant, QuotientClaims, WireEvaluations};
use ark_bn254::{Bn254, Fr, G1Affine};
use ark_ec::AffineRepr;

fn scalar_hex(v: u8) -> String {
    format!("{}{:02x}", "00".repeat(31), v)
}

fn generator_hex() -> String {
    scalar_hex(1) + &scalar_hex(2)
}

fn fixed_proof(claims: Option<QuotientClaims<Fr>>) -> Proof<Bn254> {
    let g = G1Affine::generator();
    Proof {
        lro: [g; 3],
        h: [g; 3],
        evaluations: WireEvaluations {
            l: Fr::from(1u64),
            r: Fr::from(2u64),
            o: Fr::from(3u64),
            s1: Fr::from(4u64),
            s2: Fr::from(5u64),
        },
        z: g,
        z_at_zeta_omega: Fr::from(6u64),
        claims,
        opening_at_zeta: g,
        opening_at_zeta_omega: g,
    }
}

#[test]
fn test_golden_folded_quotient() {
    let proof = fixed_proof(None);
    let expected = [
        generator_hex().repeat(6),
        (1..=5).map(scalar_hex).collect(),
        generator_hex(),
        scalar_hex(6),
        generator_hex().repeat(2),
    ]
    .concat();

    let bytes = encode_proof(&proof);
    assert_eq!(bytes.len(), 768);
    assert_eq!(hex::encode(&bytes), expected);
    assert_eq!(decode_proof::<Bn254>(&bytes, ProtocolVariant::FoldedQuotient).unwrap(), proof);
}

#[test]
fn test_golden_explicit_quotient() {
    let proof = fixed_proof(Some(QuotientClaims { quotient: Fr::from(7u64), linearized: Fr::from(8u64) }));
    let expected = [
        generator_hex().repeat(6),
        (1..=5).map(scalar_hex).collect(),
        generator_hex(),
        scalar_hex(6),
        scalar_hex(7),
        scalar_hex(8),
        generator_hex().repeat(2),
    ]
    .concat();

    let bytes = encode_proof(&proof);
    assert_eq!(bytes.len(), 26 * 32);
    assert_eq!(hex::encode(&bytes), expected);
    assert_eq!(decode_proof::<Bn254>(&bytes, ProtocolVariant::ExplicitQuotient).unwrap(), proof);
}

#[test]
fn test_identity_point_encodes_as_zeros() {
    let mut proof = fixed_proof(None);
    proof.h[2] = G1Affine::identity();
    let bytes = encode_proof(&proof);
    assert!(bytes[320..384].iter().all(|b| *b == 0));
    assert_eq!(decode_proof::<Bn254>(&bytes, ProtocolVariant::FoldedQuotient).unwrap(), proof);
}

#[test]
fn test_bls12_381_length() {
    let g = ark_bls12_381::G1Affine::generator();
    let proof: Proof<ark_bls12_381::Bls12_381> = Proof {
        lro: [g; 3],
        h: [g; 3],
        evaluations: WireEvaluations {
            l: ark_bls12_381::Fr::from(1u64),
            r: ark_bls12_381::Fr::from(2u64),
            o: ark_bls12_381::Fr::from(3u64),
            s1: ark_bls12_381::Fr::from(4u64),
            s2: ark_bls12_381::Fr::from(5u64),
        },
        z: g,
        z_at_zeta_omega: ark_bls12_381::Fr::from(6u64),
        claims: None,
        opening_at_zeta: g,
        opening_at_zeta_omega: g,
    };
    let bytes = encode_proof(&proof);
    assert_eq!(bytes.len(), 1056);
    assert_eq!(
        decode_proof::<ark_bls12_381::Bls12_381>(&bytes, ProtocolVariant::FoldedQuotient).unwrap(),
        proof
    );
}
