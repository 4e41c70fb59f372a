// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! PLONK proofs and their fixed positional layout.
//!
//! [`ProofLayout`] is the one place where the order of proof elements is
//! written down. The codec serializes in this order and the verifier
//! generator derives its hardcoded slice offsets from it.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::curve::{Curve, SupportedCurve, G1};
use crate::encoding::SCALAR_WIDTH;

/// How the quotient identity is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolVariant {
    /// The identity is folded into the opening check; the proof carries no
    /// quotient or linearization evaluations.
    #[default]
    FoldedQuotient,
    /// The proof carries `t(ζ)` and `r(ζ)` and the verifier checks
    /// `r(ζ) + PI(ζ) + α·perm − α²L₁(ζ) == t(ζ)·Z_H(ζ)` before any curve work.
    ExplicitQuotient,
}

impl ProtocolVariant {
    pub fn name(self) -> &'static str {
        match self {
            ProtocolVariant::FoldedQuotient => "folded-quotient",
            ProtocolVariant::ExplicitQuotient => "explicit-quotient",
        }
    }
}

impl fmt::Display for ProtocolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Point,
    Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofField {
    L,
    R,
    O,
    H0,
    H1,
    H2,
    LAtZeta,
    RAtZeta,
    OAtZeta,
    S1AtZeta,
    S2AtZeta,
    Z,
    ZAtZetaOmega,
    QuotientAtZeta,
    LinearizedAtZeta,
    OpeningAtZeta,
    OpeningAtZetaOmega,
}

impl ProofField {
    pub fn kind(self) -> FieldKind {
        use ProofField::*;
        match self {
            L | R | O | H0 | H1 | H2 | Z | OpeningAtZeta | OpeningAtZetaOmega => FieldKind::Point,
            _ => FieldKind::Scalar,
        }
    }

    /// Identifier of this element in generated verifier code.
    pub fn ident(self) -> &'static str {
        use ProofField::*;
        match self {
            L => "L_COM",
            R => "R_COM",
            O => "O_COM",
            H0 => "H0",
            H1 => "H1",
            H2 => "H2",
            LAtZeta => "L_AT_ZETA",
            RAtZeta => "R_AT_ZETA",
            OAtZeta => "O_AT_ZETA",
            S1AtZeta => "S1_AT_ZETA",
            S2AtZeta => "S2_AT_ZETA",
            Z => "GRAND_PRODUCT",
            ZAtZetaOmega => "GRAND_PRODUCT_AT_ZETA_OMEGA",
            QuotientAtZeta => "QUOTIENT_AT_ZETA",
            LinearizedAtZeta => "LINEARIZED_AT_ZETA",
            OpeningAtZeta => "OPENING_AT_ZETA",
            OpeningAtZetaOmega => "OPENING_AT_ZETA_OMEGA",
        }
    }

    /// Field order for a protocol variant.
    pub fn order(variant: ProtocolVariant) -> &'static [ProofField] {
        use ProofField::*;
        match variant {
            ProtocolVariant::FoldedQuotient => &[
                L, R, O, H0, H1, H2, LAtZeta, RAtZeta, OAtZeta, S1AtZeta, S2AtZeta, Z,
                ZAtZetaOmega, OpeningAtZeta, OpeningAtZetaOmega,
            ],
            ProtocolVariant::ExplicitQuotient => &[
                L, R, O, H0, H1, H2, LAtZeta, RAtZeta, OAtZeta, S1AtZeta, S2AtZeta, Z,
                ZAtZetaOmega, QuotientAtZeta, LinearizedAtZeta, OpeningAtZeta,
                OpeningAtZetaOmega,
            ],
        }
    }
}

/// Byte offsets of every proof element for one curve and variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofLayout {
    pub curve: Curve,
    pub variant: ProtocolVariant,
    entries: Vec<(ProofField, Range<usize>)>,
    len: usize,
}

impl ProofLayout {
    pub fn new(curve: Curve, variant: ProtocolVariant) -> Self {
        let point_width = curve.parameters().g1_width();
        let mut offset = 0;
        let entries = ProofField::order(variant)
            .iter()
            .map(|&field| {
                let width = match field.kind() {
                    FieldKind::Point => point_width,
                    FieldKind::Scalar => SCALAR_WIDTH,
                };
                let range = offset..offset + width;
                offset += width;
                (field, range)
            })
            .collect();
        Self { curve, variant, entries, len: offset }
    }

    pub fn entries(&self) -> &[(ProofField, Range<usize>)] {
        &self.entries
    }

    pub fn range(&self, field: ProofField) -> Option<Range<usize>> {
        self.entries.iter().find(|(f, _)| *f == field).map(|(_, r)| r.clone())
    }

    pub fn contains(&self, field: ProofField) -> bool {
        self.range(field).is_some()
    }

    pub fn byte_len(&self) -> usize {
        self.len
    }

    /// Number of 32-byte ABI elements the encoded proof occupies.
    pub fn chunk_count(&self) -> usize {
        self.len / SCALAR_WIDTH
    }

    pub fn scalar_fields(&self) -> impl Iterator<Item = ProofField> + '_ {
        self.entries.iter().map(|(f, _)| *f).filter(|f| f.kind() == FieldKind::Scalar)
    }
}

/// Evaluations of the wire and permutation polynomials at ζ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireEvaluations<F> {
    pub l: F,
    pub r: F,
    pub o: F,
    pub s1: F,
    pub s2: F,
}

/// Extra evaluations carried by [`ProtocolVariant::ExplicitQuotient`] proofs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotientClaims<F> {
    pub quotient: F,
    pub linearized: F,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof<C: SupportedCurve> {
    /// Wire commitments `[L, R, O]`.
    pub lro: [G1<C>; 3],
    /// Quotient commitments, split in three.
    pub h: [G1<C>; 3],
    pub evaluations: WireEvaluations<C::Fr>,
    /// Grand-product commitment.
    pub z: G1<C>,
    pub z_at_zeta_omega: C::Fr,
    pub claims: Option<QuotientClaims<C::Fr>>,
    /// Batched opening proof at ζ.
    pub opening_at_zeta: G1<C>,
    /// Opening proof of `Z` at ωζ.
    pub opening_at_zeta_omega: G1<C>,
}

pub enum ProofElement<'a, C: SupportedCurve> {
    Point(&'a G1<C>),
    Scalar(C::Fr),
}

impl<C: SupportedCurve> Proof<C> {
    pub fn variant(&self) -> ProtocolVariant {
        match self.claims {
            Some(_) => ProtocolVariant::ExplicitQuotient,
            None => ProtocolVariant::FoldedQuotient,
        }
    }

    pub fn layout(&self) -> ProofLayout {
        ProofLayout::new(C::CURVE, self.variant())
    }

    /// The element stored under `field`, or `None` if this proof's variant
    /// does not carry it.
    pub fn element(&self, field: ProofField) -> Option<ProofElement<'_, C>> {
        use ProofElement::{Point, Scalar};
        use ProofField::*;
        let e = &self.evaluations;
        Some(match field {
            L => Point(&self.lro[0]),
            R => Point(&self.lro[1]),
            O => Point(&self.lro[2]),
            H0 => Point(&self.h[0]),
            H1 => Point(&self.h[1]),
            H2 => Point(&self.h[2]),
            LAtZeta => Scalar(e.l),
            RAtZeta => Scalar(e.r),
            OAtZeta => Scalar(e.o),
            S1AtZeta => Scalar(e.s1),
            S2AtZeta => Scalar(e.s2),
            Z => Point(&self.z),
            ZAtZetaOmega => Scalar(self.z_at_zeta_omega),
            QuotientAtZeta => Scalar(self.claims?.quotient),
            LinearizedAtZeta => Scalar(self.claims?.linearized),
            OpeningAtZeta => Point(&self.opening_at_zeta),
            OpeningAtZetaOmega => Point(&self.opening_at_zeta_omega),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_counts() {
        let count = |c, v| ProofLayout::new(c, v).chunk_count();
        assert_eq!(count(Curve::Bn254, ProtocolVariant::FoldedQuotient), 24);
        assert_eq!(count(Curve::Bls12_381, ProtocolVariant::FoldedQuotient), 33);
        assert_eq!(count(Curve::Bn254, ProtocolVariant::ExplicitQuotient), 26);
        assert_eq!(count(Curve::Bls12_381, ProtocolVariant::ExplicitQuotient), 35);
    }

    #[test]
    fn test_layout_is_contiguous() {
        for curve in Curve::ALL {
            let layout = ProofLayout::new(curve, ProtocolVariant::ExplicitQuotient);
            let mut expected_start = 0;
            for (_, range) in layout.entries() {
                assert_eq!(range.start, expected_start);
                expected_start = range.end;
            }
            assert_eq!(expected_start, layout.byte_len());
            assert_eq!(layout.byte_len() % SCALAR_WIDTH, 0);
        }
    }

    #[test]
    fn test_bn254_offsets() {
        let layout = ProofLayout::new(Curve::Bn254, ProtocolVariant::FoldedQuotient);
        assert_eq!(layout.range(ProofField::H0), Some(192..256));
        assert_eq!(layout.range(ProofField::LAtZeta), Some(384..416));
        assert_eq!(layout.range(ProofField::Z), Some(544..608));
        assert_eq!(layout.range(ProofField::OpeningAtZetaOmega), Some(704..768));
        assert_eq!(layout.range(ProofField::QuotientAtZeta), None);
    }

    #[test]
    fn test_explicit_variant_adds_two_scalars() {
        let folded = ProofLayout::new(Curve::Bls12_381, ProtocolVariant::FoldedQuotient);
        let explicit = ProofLayout::new(Curve::Bls12_381, ProtocolVariant::ExplicitQuotient);
        assert_eq!(folded.scalar_fields().count() + 2, explicit.scalar_fields().count());
        assert_eq!(explicit.byte_len() - folded.byte_len(), 2 * SCALAR_WIDTH);
    }
}
