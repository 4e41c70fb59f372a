// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ap_setup::SetupError;
use ark_relations::r1cs::SynthesisError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("polynomial with {needed} coefficients exceeds the {available}-point SRS")]
pub struct SrsTooSmall {
    pub needed: usize,
    pub available: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("constraint synthesis: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("constraint system produced no matrices")]
    MissingMatrices,

    #[error("no radix-2 domain of size {0} for this field")]
    Domain(usize),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Srs(#[from] SrsTooSmall),
}

#[derive(Debug, thiserror::Error)]
pub enum ProveError {
    #[error("witness synthesis: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error(
        "assignment shape ({instance} instance, {witness} witness) does not match the \
         compiled circuit ({expected_instance} instance, {expected_witness} witness)"
    )]
    Shape { instance: usize, witness: usize, expected_instance: usize, expected_witness: usize },

    #[error("assignment does not satisfy gate {row}")]
    Unsatisfied { row: usize },

    #[error("assignment violates a copy constraint")]
    CopyConstraint,

    #[error("quotient numerator is not divisible by the vanishing polynomial")]
    QuotientRemainder,

    #[error("transcript produced a challenge inside the evaluation domain")]
    DegenerateChallenge,

    #[error("generated proof failed off-chain verification")]
    SelfCheck,

    #[error(transparent)]
    Srs(#[from] SrsTooSmall),
}
