// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use crate::curve::{Curve, SupportedCurve, G1, G2};
use crate::proof::ProtocolVariant;

/// Pairing-side part of a KZG setup: `[1]₁`, `[1]₂` and `[τ]₂`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KzgVerifyingKey<C: SupportedCurve> {
    pub g1: G1<C>,
    pub g2: [G2<C>; 2],
}

/// Public parameters of one compiled circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyingKey<C: SupportedCurve> {
    /// Evaluation domain size `n`, a power of two.
    pub size: u64,
    pub size_inv: C::Fr,
    /// Generator ω of the order-`n` subgroup.
    pub generator: C::Fr,
    pub nb_public_variables: usize,
    /// Shift `k`; wire ids are `ωⁱ`, `k·ωⁱ` and `k²·ωⁱ`.
    pub coset_shift: C::Fr,

    /// Permutation commitments, one per wire column.
    pub s: [G1<C>; 3],
    pub ql: G1<C>,
    pub qr: G1<C>,
    pub qm: G1<C>,
    pub qo: G1<C>,
    pub qk: G1<C>,

    pub kzg: KzgVerifyingKey<C>,

    /// Constraint indexes of committed custom gates. Always empty for
    /// circuits lowered by this workspace.
    pub commitment_constraint_indexes: Vec<u64>,

    pub variant: ProtocolVariant,
}

impl<C: SupportedCurve> VerifyingKey<C> {
    pub fn curve(&self) -> Curve {
        C::CURVE
    }

    pub fn has_custom_gate_commitments(&self) -> bool {
        !self.commitment_constraint_indexes.is_empty()
    }

    /// Selector and permutation commitments in transcript order.
    pub fn transcript_points(&self) -> [&G1<C>; 8] {
        [&self.s[0], &self.s[1], &self.s[2], &self.ql, &self.qr, &self.qm, &self.qo, &self.qk]
    }
}
