// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Ceremony files written to disk, read back through a directory store.

use ap_setup::insecure::{generate, write_ceremony};
use ap_setup::{trusted_srs, SetupError, SetupId, SetupStore, Srs};
use ap_types::{Curve, G1};
use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use ark_ec::AffineRepr;
use ark_std::rand::{rngs::StdRng, SeedableRng};

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_bls_slicing_via_directory() {
    let mut rng = test_rng();
    let srs = generate::<Bls12_381, _>(16, &mut rng);
    let dir = tempfile::tempdir().unwrap();
    write_ceremony(dir.path(), SetupId::DuskBls12_381, &srs).unwrap();

    let store = SetupStore::directory(dir.path());
    let element = Curve::Bls12_381.parameters().compressed_g1_width;
    for n in [2usize, 8, 16] {
        let blobs = store.load(SetupId::DuskBls12_381, n).unwrap();
        assert_eq!(blobs.declared_count().unwrap(), n);
        assert_eq!(blobs.g1.len(), 4 + n * element);

        let sliced = trusted_srs::<Bls12_381>(&store, SetupId::DuskBls12_381, n).unwrap();
        assert_eq!(sliced.g1_powers, srs.g1_powers[..n]);
        assert_eq!(sliced.kzg, srs.kzg);
    }
    assert!(matches!(
        store.load(SetupId::DuskBls12_381, 17),
        Err(SetupError::InsufficientParameters { required: 17, .. })
    ));
}

#[test]
fn test_bn254_blob_roundtrip() {
    let mut rng = test_rng();
    let srs = generate::<Bn254, _>(9, &mut rng);
    assert_eq!(srs.g1_powers[0], G1::<Bn254>::generator());
    let blobs = srs.to_blobs().unwrap();
    assert_eq!(blobs.g2.len(), 2 * 64 + 32);
    assert_eq!(Srs::<Bn254>::from_blobs(&blobs).unwrap(), srs);
}

#[test]
fn test_curve_mismatch() {
    let store = SetupStore::in_memory();
    let err = trusted_srs::<Bn254>(&store, SetupId::EthereumKzgBls12_381, 4).unwrap_err();
    assert!(matches!(err, SetupError::CurveMismatch { expected: Curve::Bn254, .. }));
}

#[test]
fn test_corrupt_point_is_reported() {
    let mut rng = test_rng();
    let srs = generate::<Bn254, _>(4, &mut rng);
    let mut blobs = srs.to_blobs().unwrap();
    // Second power: set both flag bits, which no valid encoding carries.
    blobs.g1[4 + 32 + 31] |= 0xC0;
    let store = SetupStore::in_memory().with_blobs(SetupId::PerpetualPowersOfTauBn254, blobs);
    let err = trusted_srs::<Bn254>(&store, SetupId::PerpetualPowersOfTauBn254, 4).unwrap_err();
    assert!(matches!(err, SetupError::Point { blob: "pk", index: 1, .. }), "{err}");
}

#[test]
fn test_gnark_encoded_points_are_rejected() {
    // BLS12-381 G1 generator, big-endian with the compression flag in the first byte.
    let zcash_generator =
        hex::decode("97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb")
            .unwrap();
    let mut rng = test_rng();
    let mut blobs = generate::<Bls12_381, _>(4, &mut rng).to_blobs().unwrap();
    blobs.g1[4..4 + 48].copy_from_slice(&zcash_generator);

    let store = SetupStore::in_memory().with_blobs(SetupId::EthereumKzgBls12_381, blobs);
    let err = trusted_srs::<Bls12_381>(&store, SetupId::EthereumKzgBls12_381, 4).unwrap_err();
    assert!(matches!(err, SetupError::Point { blob: "pk", index: 0, .. }), "{err}");
}
