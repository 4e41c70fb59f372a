// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Raw byte encodings understood by the AVM `ec_*` opcodes.
//!
//! # Byte order
//!
//! - **Scalars**: 32-byte big-endian.
//! - **Points**: `x ‖ y`, each coordinate big-endian and left-padded to the
//!   curve's coordinate width. Extension-field coordinates are written
//!   `c0 ‖ c1`. The identity is all zeros.
//! - **Hash form**: the raw form, except that an all-zero identity gets the
//!   curve's infinity flag OR-ed into its first byte (see [`hash_form`]).

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::CurveConfig;
use ark_ff::{Field, PrimeField};
use num_bigint::BigUint;

use crate::error::{TypesError, TypesResult};

/// Width of every scalar in proofs, public inputs and transcripts.
pub const SCALAR_WIDTH: usize = 32;

type BasePrime<P> = <<P as CurveConfig>::BaseField as Field>::BasePrimeField;

/// How much validation [`point_from_bytes`] performs beyond length checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointCheck {
    OnCurve,
    Subgroup,
}

/// Big-endian, left-padded to `width` bytes.
pub fn uint_to_be(value: &BigUint, width: usize) -> Vec<u8> {
    debug_assert!(value.bits() as usize <= 8 * width);
    let bytes = value.to_bytes_be();
    let bytes = &bytes[bytes.len().saturating_sub(width)..];
    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(bytes);
    out
}

pub fn prime_to_be<F: PrimeField>(x: &F, width: usize) -> Vec<u8> {
    uint_to_be(&(*x).into(), width)
}

/// Parses a big-endian field element, rejecting values `>= modulus`.
pub fn prime_from_be<F: PrimeField>(bytes: &[u8], what: &'static str) -> TypesResult<F> {
    let value = BigUint::from_bytes_be(bytes);
    let modulus: BigUint = F::MODULUS.into();
    if value >= modulus {
        return Err(TypesError::NonCanonical { what });
    }
    Ok(F::from(value))
}

pub fn scalar_to_bytes<F: PrimeField>(x: &F) -> Vec<u8> {
    prime_to_be(x, SCALAR_WIDTH)
}

pub fn scalar_from_bytes<F: PrimeField>(bytes: &[u8]) -> TypesResult<F> {
    if bytes.len() != SCALAR_WIDTH {
        return Err(TypesError::Length { expected: SCALAR_WIDTH, actual: bytes.len() });
    }
    prime_from_be(bytes, "scalar")
}

/// Length of a raw point encoding for curve config `P`.
pub fn point_width<P: SWCurveConfig>(coordinate_width: usize) -> usize {
    2 * P::BaseField::extension_degree() as usize * coordinate_width
}

pub fn point_to_bytes<P: SWCurveConfig>(p: &Affine<P>, coordinate_width: usize) -> Vec<u8> {
    let width = point_width::<P>(coordinate_width);
    if p.infinity {
        return vec![0u8; width];
    }
    let mut out = Vec::with_capacity(width);
    for coordinate in [&p.x, &p.y] {
        for limb in coordinate.to_base_prime_field_elements() {
            out.extend(prime_to_be(&limb, coordinate_width));
        }
    }
    out
}

pub fn point_from_bytes<P: SWCurveConfig>(
    bytes: &[u8],
    coordinate_width: usize,
    check: PointCheck,
) -> TypesResult<Affine<P>> {
    let width = point_width::<P>(coordinate_width);
    if bytes.len() != width {
        return Err(TypesError::Length { expected: width, actual: bytes.len() });
    }
    if bytes.iter().all(|b| *b == 0) {
        return Ok(Affine::identity());
    }

    let mut limbs = bytes
        .chunks(coordinate_width)
        .map(|chunk| prime_from_be::<BasePrime<P>>(chunk, "coordinate"))
        .collect::<TypesResult<Vec<_>>>()?;
    let y_limbs = limbs.split_off(limbs.len() / 2);
    let x = P::BaseField::from_base_prime_field_elems(limbs)
        .ok_or(TypesError::NonCanonical { what: "coordinate" })?;
    let y = P::BaseField::from_base_prime_field_elems(y_limbs)
        .ok_or(TypesError::NonCanonical { what: "coordinate" })?;

    let point = Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(TypesError::NotOnCurve);
    }
    if check == PointCheck::Subgroup && !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(TypesError::NotInSubgroup);
    }
    Ok(point)
}

/// The representation of a raw point encoding that goes into Fiat–Shamir
/// transcripts. Identical to the input unless it is the all-zero identity
/// and the curve defines a flag.
pub fn hash_form(raw: &[u8], infinity_flag: Option<u8>) -> Vec<u8> {
    let mut out = raw.to_vec();
    if let Some(flag) = infinity_flag {
        if !out.is_empty() && out.iter().all(|b| *b == 0) {
            out[0] |= flag;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use ark_std::UniformRand;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_bn254_generator_is_one_two() {
        let g = ark_bn254::G1Affine::generator();
        let bytes = point_to_bytes(&g, 32);
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[31], 1);
        assert_eq!(bytes[63], 2);
        assert!(bytes[..31].iter().chain(&bytes[32..63]).all(|b| *b == 0));
    }

    #[test]
    fn test_identity_is_all_zeros() {
        let id = ark_bls12_381::G1Affine::identity();
        let raw = point_to_bytes(&id, 48);
        assert_eq!(raw, vec![0u8; 96]);

        let decoded: ark_bls12_381::G1Affine =
            point_from_bytes(&raw, 48, PointCheck::Subgroup).unwrap();
        assert!(decoded.infinity);
    }

    #[test]
    fn test_hash_form_flags_only_identity() {
        let raw = vec![0u8; 96];
        let flagged = hash_form(&raw, Some(0x80));
        assert_eq!(flagged[0], 0x80);
        assert!(flagged[1..].iter().all(|b| *b == 0));

        assert_eq!(hash_form(&raw, None), raw);

        let g = point_to_bytes(&ark_bls12_381::G1Affine::generator(), 48);
        assert_eq!(hash_form(&g, Some(0x80)), g);
    }

    #[test]
    fn test_point_decode_roundtrip_g2() {
        let mut rng = test_rng();
        let p = (ark_bls12_381::G2Affine::generator() * ark_bls12_381::Fr::rand(&mut rng))
            .into_affine();
        let bytes = point_to_bytes(&p, 48);
        assert_eq!(bytes.len(), 192);
        let back: ark_bls12_381::G2Affine =
            point_from_bytes(&bytes, 48, PointCheck::Subgroup).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_point_decode_rejects_off_curve() {
        let mut bytes = point_to_bytes(&ark_bn254::G1Affine::generator(), 32);
        bytes[63] = 3;
        let res = point_from_bytes::<ark_bn254::g1::Config>(&bytes, 32, PointCheck::OnCurve);
        assert_eq!(res, Err(TypesError::NotOnCurve));
    }

    #[test]
    fn test_scalar_rejects_modulus() {
        let modulus: BigUint = ark_bn254::Fr::MODULUS.into();
        let bytes = uint_to_be(&modulus, 32);
        assert!(matches!(
            scalar_from_bytes::<ark_bn254::Fr>(&bytes),
            Err(TypesError::NonCanonical { .. })
        ));

        let below = uint_to_be(&(modulus - 1u32), 32);
        assert_eq!(scalar_from_bytes::<ark_bn254::Fr>(&below).unwrap(), -ark_bn254::Fr::from(1u64));
    }
}
