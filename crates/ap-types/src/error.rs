// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Errors shared by the data-model crate.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypesError {
    #[error("unsupported curve `{0}`: expected bn254 or bls12-381")]
    UnsupportedCurve(String),

    #[error("expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("non-canonical {what}: value is not below the field modulus")]
    NonCanonical { what: &'static str },

    #[error("point is not on the curve")]
    NotOnCurve,

    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,

    #[error("witness header declares {declared} elements but {actual} follow")]
    WitnessCount { declared: usize, actual: usize },

    #[error("witness has {0} elements, more than a u32 count can describe")]
    WitnessTooLarge(usize),
}

pub type TypesResult<T> = Result<T, TypesError>;
