// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof and public-input blobs in the byte layout AVM verifiers read.
//!
//! Proofs are the concatenation of their elements in [`ProofLayout`] order,
//! with no length prefixes: points raw `x ‖ y` (all zeros for the identity),
//! scalars 32-byte big-endian.

use ap_types::encoding::{point_from_bytes, point_to_bytes, scalar_from_bytes, scalar_to_bytes, PointCheck};
use ap_types::{
    Proof, ProofElement, ProofField, ProofLayout, ProtocolVariant, QuotientClaims, SupportedCurve,
    WireEvaluations, Witness, WITNESS_HEADER_LEN, G1,
};
use ark_ff::PrimeField;

use crate::error::CodecError;

pub fn encode_proof<C: SupportedCurve>(proof: &Proof<C>) -> Vec<u8> {
    let layout = proof.layout();
    let cw = C::parameters().coordinate_width;
    let mut out = Vec::with_capacity(layout.byte_len());
    for (field, _) in layout.entries() {
        match proof.element(*field) {
            Some(ProofElement::Point(p)) => out.extend(point_to_bytes(p, cw)),
            Some(ProofElement::Scalar(s)) => out.extend(scalar_to_bytes(&s)),
            None => {}
        }
    }
    out
}

struct Reader<'a> {
    bytes: &'a [u8],
    layout: ProofLayout,
    coordinate_width: usize,
}

impl Reader<'_> {
    fn slice(&self, field: ProofField) -> &[u8] {
        self.layout.range(field).map_or(&[][..], |r| &self.bytes[r])
    }

    fn point<C: SupportedCurve>(&self, field: ProofField) -> Result<G1<C>, CodecError> {
        point_from_bytes(self.slice(field), self.coordinate_width, PointCheck::Subgroup)
            .map_err(|source| CodecError::Field { field: field.ident(), source })
    }

    fn scalar<F: PrimeField>(&self, field: ProofField) -> Result<F, CodecError> {
        scalar_from_bytes(self.slice(field)).map_err(|source| CodecError::Field { field: field.ident(), source })
    }
}

/// Inverse of [`encode_proof`]. Points must be on the curve and in the
/// prime-order subgroup, and scalars below the modulus.
pub fn decode_proof<C: SupportedCurve>(bytes: &[u8], variant: ProtocolVariant) -> Result<Proof<C>, CodecError> {
    let layout = ProofLayout::new(C::CURVE, variant);
    if bytes.len() != layout.byte_len() {
        return Err(CodecError::ProofLength {
            curve: C::CURVE,
            variant,
            expected: layout.byte_len(),
            actual: bytes.len(),
        });
    }
    let r = Reader { bytes, layout, coordinate_width: C::parameters().coordinate_width };

    use ProofField::*;
    let claims = match variant {
        ProtocolVariant::FoldedQuotient => None,
        ProtocolVariant::ExplicitQuotient => Some(QuotientClaims {
            quotient: r.scalar(QuotientAtZeta)?,
            linearized: r.scalar(LinearizedAtZeta)?,
        }),
    };
    Ok(Proof {
        lro: [r.point::<C>(L)?, r.point::<C>(R)?, r.point::<C>(O)?],
        h: [r.point::<C>(H0)?, r.point::<C>(H1)?, r.point::<C>(H2)?],
        evaluations: WireEvaluations {
            l: r.scalar(LAtZeta)?,
            r: r.scalar(RAtZeta)?,
            o: r.scalar(OAtZeta)?,
            s1: r.scalar(S1AtZeta)?,
            s2: r.scalar(S2AtZeta)?,
        },
        z: r.point::<C>(Z)?,
        z_at_zeta_omega: r.scalar(ZAtZetaOmega)?,
        claims,
        opening_at_zeta: r.point::<C>(OpeningAtZeta)?,
        opening_at_zeta_omega: r.point::<C>(OpeningAtZetaOmega)?,
    })
}

/// Public inputs as consecutive 32-byte big-endian elements: the witness's
/// public projection in binary form, without its 12-byte header.
pub fn encode_public_inputs<F: PrimeField>(witness: &Witness<F>) -> Result<Vec<u8>, CodecError> {
    let binary = witness.public().to_binary().map_err(CodecError::WitnessExtraction)?;
    Ok(binary[WITNESS_HEADER_LEN..].to_vec())
}

/// Parses a public-input blob, rejecting values not below the modulus.
pub fn decode_public_inputs<F: PrimeField>(bytes: &[u8]) -> Result<Vec<F>, CodecError> {
    bytes
        .chunks(ap_types::encoding::SCALAR_WIDTH)
        .map(|chunk| {
            scalar_from_bytes(chunk).map_err(|source| CodecError::Field { field: "PUBLIC_INPUT", source })
        })
        .collect()
}
