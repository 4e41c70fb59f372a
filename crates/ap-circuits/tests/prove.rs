// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ap_circuit::{verify_offchain, CompileOptions, SetupMode};
use ap_circuits::{CircuitsError, ExampleCircuit};
use ap_types::{ProtocolVariant, SupportedCurve};
use ark_std::rand::{rngs::StdRng, SeedableRng};

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn pythagorean<C: SupportedCurve>(variant: ProtocolVariant) {
    let mut rng = test_rng();
    let compiled = ExampleCircuit::Pythagorean
        .compile::<C>(SetupMode::TestOnly(&mut rng), CompileOptions { variant })
        .unwrap();
    let verified = ExampleCircuit::Pythagorean.prove(&compiled, &[3, 4, 5], &mut rng).unwrap();

    let public = verified.witness.public_values().to_vec();
    assert_eq!(public, vec![C::Fr::from(3u64), C::Fr::from(4u64)]);
    assert!(verify_offchain(compiled.verifying_key(), &verified.proof, &public));

    let forged = vec![C::Fr::from(4u64), C::Fr::from(4u64)];
    assert!(!verify_offchain(compiled.verifying_key(), &verified.proof, &forged), "should fail: a changed to 4");
}

#[test]
fn test_pythagorean_bn254() {
    pythagorean::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
}

#[test]
fn test_pythagorean_bls12_381() {
    pythagorean::<ark_bls12_381::Bls12_381>(ProtocolVariant::FoldedQuotient);
    pythagorean::<ark_bls12_381::Bls12_381>(ProtocolVariant::ExplicitQuotient);
}

#[test]
fn test_cubic() {
    let mut rng = test_rng();
    let compiled = ExampleCircuit::Cubic
        .compile::<ark_bn254::Bn254>(SetupMode::TestOnly(&mut rng), CompileOptions::default())
        .unwrap();
    let verified = ExampleCircuit::Cubic.prove(&compiled, &[3], &mut rng).unwrap();
    assert_eq!(verified.witness.public_values(), &[ark_bn254::Fr::from(35u64)]);
}

#[test]
fn test_wrong_input_count() {
    let mut rng = test_rng();
    let compiled = ExampleCircuit::Cubic
        .compile::<ark_bn254::Bn254>(SetupMode::TestOnly(&mut rng), CompileOptions::default())
        .unwrap();
    let result = ExampleCircuit::Cubic.prove(&compiled, &[3, 4], &mut rng);
    assert!(matches!(result, Err(CircuitsError::InputCount { expected: 1, actual: 2, .. })));
}

#[test]
fn test_invalid_triple_is_rejected_before_proving() {
    let mut rng = test_rng();
    let compiled = ExampleCircuit::Pythagorean
        .compile::<ark_bn254::Bn254>(SetupMode::TestOnly(&mut rng), CompileOptions::default())
        .unwrap();
    let result = ExampleCircuit::Pythagorean.prove(&compiled, &[3, 4, 6], &mut rng);
    assert!(matches!(result, Err(CircuitsError::Prove(ap_circuit::ProveError::Unsatisfied { .. }))));
}
