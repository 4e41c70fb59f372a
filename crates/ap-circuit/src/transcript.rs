// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fiat–Shamir challenges. Each digest is SHA-256 over a label and the
//! previous digest, and each challenge is that digest reduced mod r.

use ap_types::encoding::{hash_form, point_to_bytes, scalar_to_bytes};
use ap_types::{SupportedCurve, VerifyingKey, G1};
use ark_ff::PrimeField;
use sha2::{Digest, Sha256};

pub type Digest32 = [u8; 32];

pub fn sha256(parts: &[&[u8]]) -> Digest32 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

pub fn reduce<F: PrimeField>(digest: &Digest32) -> F {
    F::from_be_bytes_mod_order(digest)
}

/// Raw encoding, as produced by the AVM `ec_*` opcodes.
pub fn raw<C: SupportedCurve>(p: &G1<C>) -> Vec<u8> {
    point_to_bytes(p, C::parameters().coordinate_width)
}

/// Encoding fed to the transcript.
pub fn hashed<C: SupportedCurve>(p: &G1<C>) -> Vec<u8> {
    hash_form(&raw::<C>(p), C::parameters().infinity_flag)
}

pub struct Challenges<F> {
    pub gamma: F,
    pub beta: F,
    pub alpha: F,
    pub zeta: F,
}

/// `gamma = H("gamma" ‖ S1 S2 S3 Ql Qr Qm Qo Qk ‖ public ‖ L R O)`.
pub fn gamma<C: SupportedCurve>(vk: &VerifyingKey<C>, public: &[C::Fr], lro: &[G1<C>; 3]) -> Digest32 {
    let mut bytes = b"gamma".to_vec();
    for p in vk.transcript_points() {
        bytes.extend(hashed::<C>(p));
    }
    for x in public {
        bytes.extend(scalar_to_bytes(x));
    }
    for p in lro {
        bytes.extend(hashed::<C>(p));
    }
    sha256(&[&bytes[..]])
}

pub fn beta(gamma: &Digest32) -> Digest32 {
    sha256(&[b"beta".as_slice(), gamma.as_slice()])
}

pub fn alpha<C: SupportedCurve>(beta: &Digest32, z: &G1<C>) -> Digest32 {
    sha256(&[b"alpha".as_slice(), beta.as_slice(), &hashed::<C>(z)[..]])
}

pub fn zeta<C: SupportedCurve>(alpha: &Digest32, h: &[G1<C>; 3]) -> Digest32 {
    let [h0, h1, h2] = h.each_ref().map(hashed::<C>);
    sha256(&[b"zeta".as_slice(), alpha.as_slice(), &h0[..], &h1[..], &h2[..]])
}

/// The four round challenges, in order.
pub fn challenges<C: SupportedCurve>(
    vk: &VerifyingKey<C>,
    public: &[C::Fr],
    lro: &[G1<C>; 3],
    z: &G1<C>,
    h: &[G1<C>; 3],
) -> Challenges<C::Fr> {
    let g = gamma(vk, public, lro);
    let b = beta(&g);
    let a = alpha::<C>(&b, z);
    let z = zeta::<C>(&a, h);
    Challenges { gamma: reduce(&g), beta: reduce(&b), alpha: reduce(&a), zeta: reduce(&z) }
}

/// Inputs to the opening-fold challenge `v`.
pub struct OpeningTranscript<'a, C: SupportedCurve> {
    pub zeta: C::Fr,
    /// Present for the explicit-quotient variant only.
    pub folded_h: Option<&'a G1<C>>,
    pub linearization: &'a G1<C>,
    pub lro: &'a [G1<C>; 3],
    pub s: [&'a G1<C>; 2],
    /// Claimed evaluations, in fold order (without `z(ωζ)`).
    pub claims: &'a [C::Fr],
    pub z_at_zeta_omega: C::Fr,
}

/// `v = H("gamma" ‖ ζ ‖ [folded_h] ‖ lin ‖ L R O ‖ S1 S2 ‖ claims ‖ z(ωζ))`.
///
/// The two computed commitments go in raw; proof and key points in hash form.
pub fn opening<C: SupportedCurve>(t: &OpeningTranscript<'_, C>) -> C::Fr {
    let mut bytes = b"gamma".to_vec();
    bytes.extend(scalar_to_bytes(&t.zeta));
    if let Some(h) = t.folded_h {
        bytes.extend(raw::<C>(h));
    }
    bytes.extend(raw::<C>(t.linearization));
    for p in t.lro.iter().chain(t.s) {
        bytes.extend(hashed::<C>(p));
    }
    for x in t.claims.iter().chain([&t.z_at_zeta_omega]) {
        bytes.extend(scalar_to_bytes(x));
    }
    reduce(&sha256(&[&bytes[..]]))
}

/// `u = H(digest ‖ W_ζ ‖ Z ‖ W_ωζ ‖ ζ ‖ v)`, with `Z` in hash form.
pub fn batch<C: SupportedCurve>(
    digest: &G1<C>,
    opening_at_zeta: &G1<C>,
    z: &G1<C>,
    opening_at_zeta_omega: &G1<C>,
    zeta: &C::Fr,
    v: &C::Fr,
) -> C::Fr {
    reduce(&sha256(&[
        &raw::<C>(digest)[..],
        &raw::<C>(opening_at_zeta)[..],
        &hashed::<C>(z)[..],
        &raw::<C>(opening_at_zeta_omega)[..],
        &scalar_to_bytes(zeta)[..],
        &scalar_to_bytes(v)[..],
    ]))
}
