// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ap_circuit::{CompileOptions, CompiledCircuit, SetupMode};
use ap_circuits::ExampleCircuit;
use ap_types::{ProtocolVariant, SupportedCurve};
use ap_verifier::{generate, write_verifier, GenerateError, OutputKind};
use ark_std::rand::{rngs::StdRng, SeedableRng};

fn compiled<C: SupportedCurve>(variant: ProtocolVariant) -> CompiledCircuit<C> {
    let mut rng = StdRng::seed_from_u64(42);
    ExampleCircuit::Pythagorean
        .compile::<C>(SetupMode::TestOnly(&mut rng), CompileOptions { variant })
        .unwrap()
}

#[test]
fn test_logicsig_shape() {
    let c = compiled::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
    let src = generate(c.verifying_key(), OutputKind::LogicSig).unwrap();
    assert!(src.starts_with("# Code automatically generated - DO NOT EDIT."));
    assert!(src.contains("@logicsig(name=\"Verifier\")"));
    assert!(src.contains("proof_bytes = Txn.application_args(1)[2:]"));
    assert!(src.contains("public_inputs_bytes = Txn.application_args(2)[2:]"));
    assert!(src.contains("assert proof_bytes.length == 768"));
    assert!(src.contains("VK_NB_PUBLIC_INPUTS = UInt64(2)"));
    assert!(src.contains("EC.BN254g1"));
    assert!(src.contains("return False"));
    assert!(!src.contains("arc4.Bool"));
    assert!(!src.contains("QUOTIENT_AT_ZETA"));
    // BN254 has no flagged identity encoding.
    assert!(!src.contains("def fs("));
}

#[test]
fn test_contract_shape() {
    let c = compiled::<ark_bls12_381::Bls12_381>(ProtocolVariant::ExplicitQuotient);
    let src = generate(c.verifying_key(), OutputKind::SmartContract).unwrap();
    assert!(src.contains("class Verifier(ARC4Contract):"));
    for method in ["def create(", "def update(", "def make_immutable(", "def verify("] {
        assert!(src.contains(method), "missing {method}");
    }
    assert!(src.contains("proof_bytes = proof.bytes[2:]"));
    assert!(src.contains("assert proof_bytes.length == 1120"));
    assert!(src.contains("return arc4.Bool(False)"));
    assert!(src.contains("EC.BLS12_381g1"));
    assert!(src.contains("def fs("));
    assert!(src.contains("VK_QL_fs = Bytes.from_hex("));
    assert!(src.contains("QUOTIENT_AT_ZETA"));
}

#[test]
fn test_generation_is_deterministic() {
    let c = compiled::<ark_bls12_381::Bls12_381>(ProtocolVariant::FoldedQuotient);
    let a = generate(c.verifying_key(), OutputKind::LogicSig).unwrap();
    let b = generate(c.verifying_key(), OutputKind::LogicSig).unwrap();
    assert_eq!(a, b);

    let mut written = Vec::new();
    write_verifier(c.verifying_key(), OutputKind::LogicSig, &mut written).unwrap();
    assert_eq!(written, a.into_bytes());
}

#[test]
fn test_custom_gates_rejected() {
    let c = compiled::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
    let mut vk = c.verifying_key().clone();
    vk.commitment_constraint_indexes = vec![7];
    let result = generate(&vk, OutputKind::SmartContract);
    assert!(matches!(result, Err(GenerateError::CustomGatesUnsupported { count: 1 })));
}
