// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Ceremony points in arkworks compressed form.
//!
//! Blobs are read with `CanonicalDeserialize`: little-endian coordinates with
//! the flag bits in the last byte. Files exported by gnark-crypto (big-endian,
//! flags in the first byte) are not accepted and fail with
//! [`SetupError::Point`]; convert them first, or write ceremonies with
//! [`Srs::to_blobs`].

use ap_types::{KzgVerifyingKey, SupportedCurve, G1, G2};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use tracing::debug;

use crate::error::{SetupError, SetupResult};
use crate::loader::{SetupBlobs, SetupId, SetupStore, COUNT_HEADER_LEN};

/// How ceremony points must be encoded, for diagnostics.
pub const POINT_ENCODING: &str = "arkworks compressed (little-endian, flags in the last byte)";

/// Structured reference string: G1 powers of τ for committing, plus the
/// pairing-side points for verifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Srs<C: SupportedCurve> {
    pub g1_powers: Vec<G1<C>>,
    pub kzg: KzgVerifyingKey<C>,
}

impl<C: SupportedCurve> Srs<C> {
    pub fn len(&self) -> usize {
        self.g1_powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1_powers.is_empty()
    }

    /// Decodes blobs produced by [`SetupStore::load`] or [`Srs::to_blobs`].
    pub fn from_blobs(blobs: &SetupBlobs) -> SetupResult<Self> {
        let params = C::parameters();
        let count = blobs.declared_count()?;
        let body = &blobs.g1[COUNT_HEADER_LEN..];
        let available = body.len() / params.compressed_g1_width;
        if available < count {
            return Err(SetupError::InsufficientParameters { required: count, declared: count, available });
        }

        let g1_powers = body
            .chunks_exact(params.compressed_g1_width)
            .take(count)
            .enumerate()
            .map(|(index, chunk)| {
                G1::<C>::deserialize_compressed(chunk)
                    .map_err(|source| SetupError::Point { blob: "pk", index, source })
            })
            .collect::<SetupResult<Vec<_>>>()?;

        let (g2w, g1w) = (params.compressed_g2_width, params.compressed_g1_width);
        let expected = 2 * g2w + g1w;
        if blobs.g2.len() != expected {
            return Err(SetupError::VerifierBlobLength { expected, actual: blobs.g2.len() });
        }
        let g2_at = |index: usize| {
            G2::<C>::deserialize_compressed(&blobs.g2[index * g2w..(index + 1) * g2w])
                .map_err(|source| SetupError::Point { blob: "vk", index, source })
        };
        let g2 = [g2_at(0)?, g2_at(1)?];
        let g1 = G1::<C>::deserialize_compressed(&blobs.g2[2 * g2w..])
            .map_err(|source| SetupError::Point { blob: "vk", index: 2, source })?;

        debug!(curve = %C::CURVE, powers = g1_powers.len(), "decoded srs");
        Ok(Self { g1_powers, kzg: KzgVerifyingKey { g1, g2 } })
    }

    /// Encodes this SRS in the ceremony file format.
    pub fn to_blobs(&self) -> SetupResult<SetupBlobs> {
        let mut g1 = (self.g1_powers.len() as u32).to_be_bytes().to_vec();
        for p in &self.g1_powers {
            p.serialize_compressed(&mut g1)?;
        }
        let mut g2 = Vec::new();
        for p in &self.kzg.g2 {
            p.serialize_compressed(&mut g2)?;
        }
        self.kzg.g1.serialize_compressed(&mut g2)?;
        Ok(SetupBlobs { g1, g2 })
    }
}

/// Loads `size` powers from a trusted ceremony and decodes them.
pub fn trusted_srs<C: SupportedCurve>(
    store: &SetupStore,
    id: SetupId,
    size: usize,
) -> SetupResult<Srs<C>> {
    if id.curve() != C::CURVE {
        return Err(SetupError::CurveMismatch { id, expected: C::CURVE, actual: id.curve() });
    }
    let blobs = store.load(id, size)?;
    Srs::from_blobs(&blobs)
}
