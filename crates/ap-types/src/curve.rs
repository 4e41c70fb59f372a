// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve tags, per-curve encoding parameters and the [`SupportedCurve`]
//! binding between a tag and its arkworks implementation.

use std::fmt;
use std::str::FromStr;

use ark_ec::pairing::Pairing;
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{One, PrimeField};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::TypesError;

/// The two pairing-friendly curves the AVM exposes opcodes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    #[serde(rename = "bn254")]
    Bn254,
    #[serde(rename = "bls12-381")]
    Bls12_381,
}

impl Curve {
    pub const ALL: [Curve; 2] = [Curve::Bn254, Curve::Bls12_381];

    pub fn name(self) -> &'static str {
        match self {
            Curve::Bn254 => "bn254",
            Curve::Bls12_381 => "bls12-381",
        }
    }

    pub fn parameters(self) -> CurveParameters {
        match self {
            Curve::Bn254 => CurveParameters {
                curve: self,
                scalar_modulus: ark_bn254::Fr::MODULUS.into(),
                base_modulus: ark_bn254::Fq::MODULUS.into(),
                coordinate_width: 32,
                scalar_width: 32,
                vm_group: "BN254g1",
                infinity_flag: None,
                compressed_g1_width: 32,
                compressed_g2_width: 64,
            },
            Curve::Bls12_381 => CurveParameters {
                curve: self,
                scalar_modulus: ark_bls12_381::Fr::MODULUS.into(),
                base_modulus: ark_bls12_381::Fq::MODULUS.into(),
                coordinate_width: 48,
                scalar_width: 32,
                vm_group: "BLS12_381g1",
                // Transcripts hash the identity in its flagged compressed form.
                infinity_flag: Some(0x80),
                compressed_g1_width: 48,
                compressed_g2_width: 96,
            },
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "bn254" | "bn256" => Ok(Curve::Bn254),
            "bls12381" => Ok(Curve::Bls12_381),
            _ => Err(TypesError::UnsupportedCurve(s.to_string())),
        }
    }
}

/// Everything the codec and the verifier generator need to know about a
/// curve besides its group law.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParameters {
    pub curve: Curve,
    /// Order of the scalar field, `r`.
    pub scalar_modulus: BigUint,
    /// Characteristic of the coordinate field, `p`.
    pub base_modulus: BigUint,
    /// Bytes per base-field coordinate in the raw point encoding.
    pub coordinate_width: usize,
    /// Bytes per scalar in proofs and public inputs.
    pub scalar_width: usize,
    /// Group name passed to the AVM `ec_*` opcodes.
    pub vm_group: &'static str,
    /// Byte OR-ed into the leading byte of the identity before hashing.
    pub infinity_flag: Option<u8>,
    pub compressed_g1_width: usize,
    pub compressed_g2_width: usize,
}

impl CurveParameters {
    pub fn g1_width(&self) -> usize {
        2 * self.coordinate_width
    }

    pub fn g2_width(&self) -> usize {
        4 * self.coordinate_width
    }
}

/// A curve tag bound to its arkworks types.
///
/// Implemented for exactly the curves in [`Curve`], so generic code over
/// `C: SupportedCurve` can never be instantiated with anything else.
pub trait SupportedCurve: Copy + fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    type Fr: PrimeField;
    type G1: SWCurveConfig<ScalarField = Self::Fr>;
    type G2: SWCurveConfig<ScalarField = Self::Fr>;

    const CURVE: Curve;

    /// `true` iff `∏ e(g1[i], g2[i]) == 1`.
    fn pairing_is_one(g1: &[Affine<Self::G1>], g2: &[Affine<Self::G2>]) -> bool;

    fn parameters() -> CurveParameters {
        Self::CURVE.parameters()
    }
}

pub type G1<C> = Affine<<C as SupportedCurve>::G1>;
pub type G2<C> = Affine<<C as SupportedCurve>::G2>;

impl SupportedCurve for ark_bn254::Bn254 {
    type Fr = ark_bn254::Fr;
    type G1 = ark_bn254::g1::Config;
    type G2 = ark_bn254::g2::Config;

    const CURVE: Curve = Curve::Bn254;

    fn pairing_is_one(g1: &[Affine<Self::G1>], g2: &[Affine<Self::G2>]) -> bool {
        <ark_bn254::Bn254 as Pairing>::multi_pairing(g1.iter().copied(), g2.iter().copied())
            .0
            .is_one()
    }
}

impl SupportedCurve for ark_bls12_381::Bls12_381 {
    type Fr = ark_bls12_381::Fr;
    type G1 = ark_bls12_381::g1::Config;
    type G2 = ark_bls12_381::g2::Config;

    const CURVE: Curve = Curve::Bls12_381;

    fn pairing_is_one(g1: &[Affine<Self::G1>], g2: &[Affine<Self::G2>]) -> bool {
        <ark_bls12_381::Bls12_381 as Pairing>::multi_pairing(g1.iter().copied(), g2.iter().copied())
            .0
            .is_one()
    }
}
