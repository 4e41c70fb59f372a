// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Test-only setup. The toxic waste τ is sampled from the caller's RNG and
//! discarded, but nothing proves it was: anyone who controls the RNG can
//! forge proofs. Never use for a deployment that holds real value.

use std::path::Path;

use ap_types::{KzgVerifyingKey, SupportedCurve, G1, G2};
use ark_ec::short_weierstrass::Projective;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{One, UniformRand};
use ark_std::rand::RngCore;
use tracing::warn;

use crate::error::SetupResult;
use crate::loader::{write_file, SetupId, PK_FILE, VK_FILE};
use crate::srs::Srs;

/// An SRS of `size` G1 powers from a freshly sampled τ.
pub fn generate<C: SupportedCurve, R: RngCore + ?Sized>(size: usize, rng: &mut R) -> Srs<C> {
    warn!(curve = %C::CURVE, size, "generating INSECURE test-only setup");
    let tau = C::Fr::rand(rng);
    let g1 = G1::<C>::generator();
    let g2 = G2::<C>::generator();

    let mut power = C::Fr::one();
    let projective: Vec<Projective<C::G1>> = (0..size)
        .map(|_| {
            let p = g1 * power;
            power *= tau;
            p
        })
        .collect();

    Srs {
        g1_powers: Projective::normalize_batch(&projective),
        kzg: KzgVerifyingKey { g1, g2: [g2, (g2 * tau).into_affine()] },
    }
}

/// Writes `srs` under `root` in the layout [`SetupStore::directory`] reads.
///
/// [`SetupStore::directory`]: crate::SetupStore::directory
pub fn write_ceremony<C: SupportedCurve>(root: &Path, id: SetupId, srs: &Srs<C>) -> SetupResult<()> {
    let blobs = srs.to_blobs()?;
    let dir = root.join(id.dir_name());
    write_file(&dir.join(PK_FILE), &blobs.g1)?;
    write_file(&dir.join(VK_FILE), &blobs.g2)
}
